use ck3_lsp::logging;
use ck3_lsp::validator::{validate_tree, Summary};
use clap::Parser;
use std::path::{Path, PathBuf};

/// The `game` folder of a CK3 install, relative to where the tool runs.
const DEFAULT_SOURCE_DIR: &str = "game";

#[derive(Parser)]
#[command(
    name = "ck3-validate",
    about = "Check CK3 script files for unbalanced braces and dangling '='"
)]
struct Cli {
    /// Folder containing `common/` and `events/`
    #[arg(default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,
    /// Errors listed per file before the rest are summarized
    #[arg(short, long, default_value_t = 5)]
    preview: usize,
}

fn print_summary(summary: &Summary, root: &Path, preview: usize) {
    for report in &summary.reports {
        let path = report.path.strip_prefix(root).unwrap_or(report.path.as_path());
        println!("{} ({} errors)", path.display(), report.issues.len());
        for issue in report.issues.iter().take(preview) {
            println!("  {}:{}  {}", issue.line, issue.column, issue.message);
        }
        if report.issues.len() > preview {
            println!("  ... and {} more", report.issues.len() - preview);
        }
    }

    println!();
    println!("Files checked:     {}", summary.files_checked);
    println!("Files with errors: {}", summary.files_with_errors);
    println!("Total errors:      {}", summary.total_errors);
    for (kind, count) in &summary.by_kind {
        println!("  {:<26}{}", kind.label(), count);
    }
}

fn main() {
    logging::init("ck3_lsp=warn");
    let cli = Cli::parse();

    if !cli.source_dir.is_dir() {
        tracing::warn!(dir = %cli.source_dir.display(), "source directory not found");
    }

    let summary = validate_tree(&cli.source_dir);
    print_summary(&summary, &cli.source_dir, cli.preview);
}
