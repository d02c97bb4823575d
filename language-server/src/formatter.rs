//! Document formatting for CK3 script.
//!
//! Script nests only through `{ }`: there are no multi-line lists or
//! continuation forms, so the brace depth at the start of a line fully
//! determines its indentation.

/// Re-indents script by brace depth with one tab per level, the convention
/// of the game's own files. Line contents are kept apart from surrounding
/// whitespace; blank lines survive and the result ends with a newline.
pub fn format_document(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut indent_level: usize = 0;

    for segment in text.split_inclusive('\n') {
        let (line, has_newline) = if let Some(stripped) = segment.strip_suffix('\n') {
            (stripped, true)
        } else {
            (segment, false)
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            if has_newline {
                result.push('\n');
            }
            continue;
        }

        let closes_block = trimmed.starts_with('}');
        if closes_block {
            indent_level = indent_level.saturating_sub(1);
        }

        result.push_str(&"\t".repeat(indent_level));
        result.push_str(trimmed);
        if has_newline {
            result.push('\n');
        }

        let mut delta = brace_delta(trimmed);
        if closes_block {
            delta += 1;
        }
        indent_level = ((indent_level as isize) + delta).max(0) as usize;
    }

    if !result.ends_with('\n') {
        result.push('\n');
    }

    result
}

/// Net braces opened by `line`, skipping strings and `#` comments.
fn brace_delta(line: &str) -> isize {
    let mut delta: isize = 0;
    let mut in_string = false;

    for b in line.bytes() {
        if in_string {
            if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'#' => break,
            b'{' => delta += 1,
            b'}' => delta -= 1,
            _ => {}
        }
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::format_document;

    #[test]
    fn indents_nested_blocks_with_tabs() {
        let source = "brave = {\ncategory = personality\n    potential = {\n  is_adult = yes\n}\n}";
        let expected =
            "brave = {\n\tcategory = personality\n\tpotential = {\n\t\tis_adult = yes\n\t}\n}\n";
        assert_eq!(format_document(source), expected);
    }

    #[test]
    fn ignores_braces_in_comments_and_strings() {
        let source = "a = {\n# }\nname = \"{x}\" # {\n}\n";
        let expected = "a = {\n\t# }\n\tname = \"{x}\" # {\n}\n";
        assert_eq!(format_document(source), expected);
    }

    #[test]
    fn keeps_single_line_blocks_and_blank_lines() {
        let source = "my.1 = {\r\n\n  trigger = { is_adult = yes }   \n}\n";
        let expected = "my.1 = {\n\n\ttrigger = { is_adult = yes }\n}\n";
        assert_eq!(format_document(source), expected);
    }

    #[test]
    fn stray_closing_brace_does_not_underflow() {
        let source = "}\na = {\nb = c\n}\n";
        let expected = "}\na = {\n\tb = c\n}\n";
        assert_eq!(format_document(source), expected);
    }
}
