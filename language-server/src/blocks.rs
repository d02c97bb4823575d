//! Enclosing-block resolution for CK3 script.
//!
//! Script is a tree of `key = value` and `key = { ... }` pairs. The editor
//! document is usually mid-edit, so nothing here builds a tree: the cursor's
//! context is recovered by scanning braces, and malformed input produces a
//! best-effort answer instead of an error.

use crate::catalog::blocks::{classify, BlockKind};

/// Copy of `text` with comment bodies and string contents blanked out, byte
/// for byte, so offsets stay valid. Quotes and newlines are kept.
fn mask(text: &str) -> Vec<u8> {
    let mut masked = text.as_bytes().to_vec();
    let mut in_string = false;
    let mut in_comment = false;

    for byte in masked.iter_mut() {
        match *byte {
            b'\n' => {
                in_string = false;
                in_comment = false;
            }
            _ if in_comment => *byte = b' ',
            b'"' => in_string = !in_string,
            _ if in_string => *byte = b' ',
            b'#' => {
                in_comment = true;
                *byte = b' ';
            }
            _ => {}
        }
    }

    masked
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b':' | b'@' | b'$' | b'-' | b'\'')
}

/// The key of a `key = {` whose brace sits at `brace`.
fn block_name_before(code: &[u8], brace: usize) -> Option<String> {
    let mut end = brace;
    while end > 0 && code[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    if end == 0 || code[end - 1] != b'=' {
        return None;
    }
    end -= 1;
    if end > 0 && code[end - 1] == b'?' {
        end -= 1;
    }
    while end > 0 && code[end - 1].is_ascii_whitespace() {
        end -= 1;
    }

    let mut start = end;
    while start > 0 && is_name_byte(code[start - 1]) {
        start -= 1;
    }
    if start == end {
        return None;
    }
    Some(String::from_utf8_lossy(&code[start..end]).into_owned())
}

/// Names of the blocks enclosing `offset`, outermost first.
///
/// Scans backward from the cursor: a `}` deepens the nesting, and any `{`
/// reached at depth zero is still open around the cursor. Anonymous blocks
/// contribute no name.
pub fn block_path_at(text: &str, offset: usize) -> Vec<String> {
    let mut end = offset.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let code = mask(&text[..end]);

    let mut depth = 0usize;
    let mut path = Vec::new();
    for idx in (0..code.len()).rev() {
        match code[idx] {
            b'}' => depth += 1,
            b'{' if depth > 0 => depth -= 1,
            b'{' => {
                if let Some(name) = block_name_before(&code, idx) {
                    path.push(name);
                }
            }
            _ => {}
        }
    }

    path.reverse();
    path
}

/// Name of the innermost named block around `offset`, `None` at the root.
pub fn immediate_parent_block(text: &str, offset: usize) -> Option<String> {
    block_path_at(text, offset).pop()
}

/// Whether script at a position is read as triggers, effects or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptContext {
    Trigger,
    Effect,
    Neutral,
}

impl ScriptContext {
    /// Walks from the innermost block outward. Control blocks (`if`, `OR`, ...)
    /// and unknown names defer to their parent; the first block with a
    /// definite kind decides.
    pub fn from_block_path(block_path: &[String]) -> Self {
        for segment in block_path.iter().rev() {
            match classify(segment) {
                BlockKind::Trigger => return ScriptContext::Trigger,
                BlockKind::Effect => return ScriptContext::Effect,
                BlockKind::Weight | BlockKind::Parameters => return ScriptContext::Neutral,
                BlockKind::Control | BlockKind::Unknown => continue,
            }
        }
        ScriptContext::Neutral
    }
}

/// One `key = value` or `key = { ...` found by [`assignments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    /// Byte offset of the key in the document.
    pub key_offset: usize,
    /// End of the key token, past any closing quote.
    pub key_end: usize,
    pub operator: String,
    /// Scalar value, unquoted. `None` for blocks and dangling operators.
    pub value: Option<String>,
    pub value_offset: Option<usize>,
    pub value_end: Option<usize>,
    pub opens_block: bool,
    /// Named blocks enclosing the key, outermost first.
    pub path: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Word,
    Quoted,
    Operator,
    Open,
    Close,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
}

fn tokenize(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut idx = 0;

    while idx < bytes.len() {
        let byte = bytes[idx];
        let start = idx;
        let kind = match byte {
            b'#' => {
                while idx < bytes.len() && bytes[idx] != b'\n' {
                    idx += 1;
                }
                continue;
            }
            _ if byte.is_ascii_whitespace() => {
                idx += 1;
                continue;
            }
            b'{' => {
                idx += 1;
                TokenKind::Open
            }
            b'}' => {
                idx += 1;
                TokenKind::Close
            }
            b'"' => {
                idx += 1;
                while idx < bytes.len() && bytes[idx] != b'"' && bytes[idx] != b'\n' {
                    idx += 1;
                }
                if idx < bytes.len() && bytes[idx] == b'"' {
                    idx += 1;
                }
                TokenKind::Quoted
            }
            b'=' | b'<' | b'>' | b'!' | b'?' => {
                idx += 1;
                if idx < bytes.len() && bytes[idx] == b'=' {
                    idx += 1;
                }
                TokenKind::Operator
            }
            _ => {
                while idx < bytes.len() && !is_word_end(bytes[idx]) {
                    idx += 1;
                }
                TokenKind::Word
            }
        };
        tokens.push(Token {
            kind,
            start,
            end: idx,
        });
    }

    tokens
}

fn is_word_end(byte: u8) -> bool {
    byte.is_ascii_whitespace()
        || matches!(byte, b'{' | b'}' | b'"' | b'#' | b'=' | b'<' | b'>' | b'!' | b'?')
}

/// Every assignment in `text`, in document order, in a single forward pass.
pub fn assignments(text: &str) -> Vec<Assignment> {
    let tokens = tokenize(text);
    let mut result = Vec::new();
    let mut stack: Vec<Option<String>> = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        let token = tokens[idx];
        match token.kind {
            TokenKind::Open => {
                stack.push(None);
                idx += 1;
                continue;
            }
            TokenKind::Close => {
                stack.pop();
                idx += 1;
                continue;
            }
            _ => {}
        }

        let operator = tokens.get(idx + 1).filter(|t| t.kind == TokenKind::Operator);
        let (Some(operator), TokenKind::Word | TokenKind::Quoted) = (operator, token.kind) else {
            idx += 1;
            continue;
        };

        let key = unquote(&text[token.start..token.end]).to_string();
        let path: Vec<String> = stack.iter().flatten().cloned().collect();
        let value_token = tokens.get(idx + 2);
        let mut assignment = Assignment {
            key: key.clone(),
            key_offset: token.start,
            key_end: token.end,
            operator: text[operator.start..operator.end].to_string(),
            value: None,
            value_offset: None,
            value_end: None,
            opens_block: false,
            path,
        };

        match value_token.map(|t| t.kind) {
            Some(TokenKind::Open) => {
                assignment.opens_block = true;
                stack.push(Some(key));
                idx += 3;
            }
            Some(TokenKind::Word | TokenKind::Quoted) => {
                let (start, end) = value_token.map(|t| (t.start, t.end)).unwrap_or_default();
                assignment.value = Some(unquote(&text[start..end]).to_string());
                assignment.value_offset = Some(start);
                assignment.value_end = Some(end);
                idx += 3;
            }
            _ => idx += 2,
        }
        result.push(assignment);
    }

    result
}

fn unquote(raw: &str) -> &str {
    let trimmed = raw.strip_prefix('"').unwrap_or(raw);
    trimmed.strip_suffix('"').unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(source: &str) -> (String, usize) {
        let offset = source.find('|').expect("cursor marker");
        (source.replacen('|', "", 1), offset)
    }

    #[test]
    fn root_has_no_parent() {
        let (text, offset) = cursor("namespace = test\n|");
        assert!(block_path_at(&text, offset).is_empty());
        assert_eq!(immediate_parent_block(&text, offset), None);
    }

    #[test]
    fn collects_full_ancestor_chain() {
        let (text, offset) = cursor(
            "test.1 = {\n\ttrigger = { is_adult = yes }\n\toption = {\n\t\tif = {\n\t\t\tlimit = { | }\n",
        );
        assert_eq!(
            block_path_at(&text, offset),
            vec!["test.1", "option", "if", "limit"]
        );
        assert_eq!(immediate_parent_block(&text, offset).as_deref(), Some("limit"));
    }

    #[test]
    fn ignores_braces_in_comments_and_strings() {
        let (text, offset) = cursor(
            "brave = {\n\t# old = { \n\tname = \"{weird}\"\n\tpotential = {\n\t\t|",
        );
        assert_eq!(block_path_at(&text, offset), vec!["brave", "potential"]);
    }

    #[test]
    fn handles_conditional_assignment_and_anonymous_blocks() {
        let (text, offset) = cursor("a ?= {\n\tlist = { { | } }\n}");
        assert_eq!(block_path_at(&text, offset), vec!["a", "list"]);
    }

    #[test]
    fn classifies_script_context() {
        let path = |s: &[&str]| s.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        assert_eq!(
            ScriptContext::from_block_path(&path(&["test.1", "option", "if"])),
            ScriptContext::Effect
        );
        assert_eq!(
            ScriptContext::from_block_path(&path(&["test.1", "option", "if", "limit", "OR"])),
            ScriptContext::Trigger
        );
        assert_eq!(
            ScriptContext::from_block_path(&path(&["test.1", "option", "ai_chance"])),
            ScriptContext::Neutral
        );
        assert_eq!(
            ScriptContext::from_block_path(&path(&["test.1", "immediate", "every_vassal"])),
            ScriptContext::Effect
        );
        assert_eq!(ScriptContext::from_block_path(&[]), ScriptContext::Neutral);
    }

    #[test]
    fn scans_assignments_with_paths() {
        let text = "brave = {\n\tcategory = personality # note\n\tpotential = { age >= 16 }\n}\n";
        let found = assignments(text);
        let keys: Vec<_> = found.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["brave", "category", "potential", "age"]);

        assert!(found[0].opens_block);
        assert!(found[0].path.is_empty());
        assert_eq!(found[1].value.as_deref(), Some("personality"));
        assert_eq!(found[1].path, vec!["brave"]);
        assert_eq!(found[3].operator, ">=");
        assert_eq!(found[3].value.as_deref(), Some("16"));
        assert_eq!(found[3].path, vec!["brave", "potential"]);
        assert_eq!(&text[found[1].key_offset..found[1].key_offset + 8], "category");
    }

    #[test]
    fn unquotes_string_values() {
        let found = assignments("name = \"Harald\"\n");
        assert_eq!(found[0].value.as_deref(), Some("Harald"));
        assert_eq!(found[0].value_offset, Some(7));
        assert_eq!(found[0].value_end, Some(15));
    }

    #[test]
    fn compact_assignments_keep_exact_spans() {
        let found = assignments("category=personality diplomacy=2");
        assert_eq!(found.len(), 2);
        assert_eq!((found[0].key_offset, found[0].key_end), (0, 8));
        assert_eq!((found[0].value_offset, found[0].value_end), (Some(9), Some(20)));
        assert_eq!(found[1].key_offset, 21);
        assert_eq!(found[1].value.as_deref(), Some("2"));
    }
}
