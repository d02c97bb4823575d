//! Line-oriented syntax lint: brace balance and dangling `=`.
//!
//! Works on raw text without building a tree, so it reports on files the
//! block parser can only guess at. Shared by the diagnostics provider and the
//! `ck3-validate` binary.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Top-level folders of a game or mod directory that hold script.
pub const SCRIPT_DIRS: &[&str] = &["common", "events"];

static ENDS_IN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w$").expect("word end pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    UnmatchedOpeningBrace,
    UnmatchedClosingBrace,
    MissingValue,
    MissingKey,
}

impl IssueKind {
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::UnmatchedOpeningBrace => "unmatched_opening_brace",
            IssueKind::UnmatchedClosingBrace => "unmatched_closing_brace",
            IssueKind::MissingValue => "missing_value",
            IssueKind::MissingKey => "missing_key",
        }
    }

    fn message(self) -> &'static str {
        match self {
            IssueKind::UnmatchedOpeningBrace => "Unmatched opening brace",
            IssueKind::UnmatchedClosingBrace => "Unmatched closing brace",
            IssueKind::MissingValue => "Missing value after '='",
            IssueKind::MissingKey => "Missing key before '='",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One problem, at a 1-based line and 1-based character column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    pub line: usize,
    pub column: usize,
    pub kind: IssueKind,
    pub message: String,
}

impl SyntaxIssue {
    fn new(kind: IssueKind, line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            kind,
            message: kind.message().to_string(),
        }
    }
}

/// A line with its comment cut off at the first `#`.
struct CodeLine<'a> {
    number: usize,
    code: &'a str,
}

impl CodeLine<'_> {
    fn column_of(&self, byte_idx: usize) -> usize {
        self.code[..byte_idx].chars().count() + 1
    }
}

fn code_lines(text: &str) -> Vec<CodeLine<'_>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| CodeLine {
            number: idx + 1,
            code: line.split('#').next().unwrap_or_default(),
        })
        .collect()
}

/// Whether `next` carries on the value of a line ending in `=`.
fn continues_value(next: &str) -> bool {
    next.starts_with('{') || (!next.contains('=') && !next.starts_with('}'))
}

pub fn validate(text: &str) -> Vec<SyntaxIssue> {
    let lines = code_lines(text);
    let mut issues = Vec::new();
    let mut open_braces: Vec<(usize, usize)> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        for (byte_idx, ch) in line.code.char_indices() {
            match ch {
                '{' => open_braces.push((line.number, line.column_of(byte_idx))),
                '}' => {
                    if open_braces.pop().is_none() {
                        issues.push(SyntaxIssue::new(
                            IssueKind::UnmatchedClosingBrace,
                            line.number,
                            line.column_of(byte_idx),
                        ));
                    }
                }
                _ => {}
            }
        }

        let trimmed = line.code.trim_end();
        if trimmed.ends_with('=') {
            let next = lines[idx + 1..]
                .iter()
                .map(|next| next.code.trim())
                .find(|next| !next.is_empty());
            if !next.is_some_and(continues_value) {
                issues.push(SyntaxIssue::new(
                    IssueKind::MissingValue,
                    line.number,
                    line.column_of(trimmed.len() - 1),
                ));
            }
        }

        let leading = line.code.trim_start();
        if leading.starts_with('=') {
            let previous = lines[..idx]
                .iter()
                .rev()
                .map(|previous| previous.code.trim())
                .find(|previous| !previous.is_empty());
            if !previous.is_some_and(|previous| ENDS_IN_WORD.is_match(previous)) {
                let byte_idx = line.code.len() - leading.len();
                issues.push(SyntaxIssue::new(
                    IssueKind::MissingKey,
                    line.number,
                    line.column_of(byte_idx),
                ));
            }
        }
    }

    for (line, column) in open_braces {
        issues.push(SyntaxIssue::new(IssueKind::UnmatchedOpeningBrace, line, column));
    }

    issues.sort_by_key(|issue| (issue.line, issue.column));
    issues
}

/// Reads a script file the way the game does: UTF-8 with an optional BOM,
/// invalid sequences replaced.
pub fn read_script(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Every `*.txt` under the script folders of `root`, sorted.
pub fn collect_script_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in SCRIPT_DIRS {
        let dir = root.join(dir);
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "script folder missing");
            continue;
        }
        for entry in WalkDir::new(&dir).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.into_path();
            if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<SyntaxIssue>,
}

#[derive(Debug, Default)]
pub struct Summary {
    pub files_checked: usize,
    pub files_with_errors: usize,
    pub total_errors: usize,
    pub by_kind: BTreeMap<IssueKind, usize>,
    pub reports: Vec<FileReport>,
}

impl Summary {
    pub fn record(&mut self, report: FileReport) {
        self.files_checked += 1;
        if report.issues.is_empty() {
            return;
        }
        self.files_with_errors += 1;
        self.total_errors += report.issues.len();
        for issue in &report.issues {
            *self.by_kind.entry(issue.kind).or_default() += 1;
        }
        self.reports.push(report);
    }
}

/// Validates every script file under `root`. Files that cannot be read are
/// logged and left out of the summary.
pub fn validate_tree(root: &Path) -> Summary {
    let mut summary = Summary::default();
    for path in collect_script_files(root) {
        let text = match read_script(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "skipping file");
                continue;
            }
        };
        let issues = validate(&text);
        summary.record(FileReport { path, issues });
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(IssueKind, usize, usize)> {
        validate(text)
            .into_iter()
            .map(|issue| (issue.kind, issue.line, issue.column))
            .collect()
    }

    #[test]
    fn reports_unclosed_brace_at_its_position() {
        assert_eq!(
            kinds("a = { \n b = 1"),
            vec![(IssueKind::UnmatchedOpeningBrace, 1, 5)]
        );
    }

    #[test]
    fn reports_stray_closing_brace() {
        assert_eq!(
            kinds("a = { } }"),
            vec![(IssueKind::UnmatchedClosingBrace, 1, 9)]
        );
    }

    #[test]
    fn balanced_script_is_clean() {
        let text = "brave = {\n\tcategory = personality\n\tpotential = {\n\t\tage >= 16\n\t}\n}\n";
        assert!(validate(text).is_empty());
    }

    #[test]
    fn comments_are_stripped() {
        assert!(validate("key = value # = trap").is_empty());
        assert!(validate("# }\nkey = value # {").is_empty());
    }

    #[test]
    fn value_may_continue_on_next_line() {
        assert!(validate("trigger =\n{\n\talways = yes\n}\n").is_empty());
        assert!(validate("name =\n\n\tmy_name\n").is_empty());
    }

    #[test]
    fn dangling_equals_is_reported() {
        assert_eq!(
            kinds("a =\nb = 1\n"),
            vec![(IssueKind::MissingValue, 1, 3)]
        );
        assert_eq!(kinds("x = {\n\ta =\n}\n"), vec![(IssueKind::MissingValue, 2, 4)]);
        assert_eq!(kinds("a ="), vec![(IssueKind::MissingValue, 1, 3)]);
    }

    #[test]
    fn leading_equals_needs_a_key_on_previous_line() {
        assert!(validate("long_key_name\n\t= yes\n").is_empty());
        assert_eq!(
            kinds("a = {\n\t= yes\n}\n"),
            vec![(IssueKind::MissingKey, 2, 2)]
        );
    }

    #[test]
    fn columns_count_characters() {
        assert_eq!(
            kinds("name = \"Åsa\" }"),
            vec![(IssueKind::UnmatchedClosingBrace, 1, 14)]
        );
    }

    #[test]
    fn summary_counts_by_kind() {
        let mut summary = Summary::default();
        summary.record(FileReport {
            path: PathBuf::from("common/a.txt"),
            issues: validate("a = { } }\nb = {"),
        });
        summary.record(FileReport {
            path: PathBuf::from("common/b.txt"),
            issues: Vec::new(),
        });
        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.files_with_errors, 1);
        assert_eq!(summary.total_errors, 2);
        assert_eq!(summary.by_kind.get(&IssueKind::UnmatchedClosingBrace), Some(&1));
        assert_eq!(summary.by_kind.get(&IssueKind::UnmatchedOpeningBrace), Some(&1));
    }

    #[test]
    fn validates_a_directory_tree() {
        let root = std::env::temp_dir().join(format!("ck3-validate-{}", std::process::id()));
        let events = root.join("events");
        std::fs::create_dir_all(&events).unwrap();
        std::fs::create_dir_all(root.join("gfx")).unwrap();
        std::fs::write(events.join("b.txt"), "\u{feff}namespace = b\n").unwrap();
        std::fs::write(events.join("a.txt"), "a.1 = {\n").unwrap();
        std::fs::write(events.join("notes.md"), "}").unwrap();
        std::fs::write(root.join("gfx").join("x.txt"), "}").unwrap();

        let files = collect_script_files(&root);
        assert_eq!(files, vec![events.join("a.txt"), events.join("b.txt")]);

        let summary = validate_tree(&root);
        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.files_with_errors, 1);
        assert_eq!(summary.reports[0].path, events.join("a.txt"));

        std::fs::remove_dir_all(&root).unwrap();
    }
}
