use dashmap::DashMap;
use regex::Regex;
use std::sync::LazyLock;
use tower_lsp::lsp_types::{Position, Range};

pub type DocumentStore = DashMap<String, Document>;

type LineOffset = usize;

/// Characters that make up one hoverable token: keys, scope chains
/// (`scope:target.father`), dates, saved scopes and signed numbers.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[A-Za-z0-9_.:@$]+").expect("word pattern is valid"));

#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    line_index: LineIndex,
}

/// A token under the cursor, with its byte span inside its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Document {
    pub fn new(text: String) -> Self {
        let line_index = LineIndex::new(&text);
        Self { text, line_index }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offset(&self, position: Position) -> Option<usize> {
        self.line_index.offset(&self.text, position)
    }

    pub fn position_at(&self, byte_offset: usize) -> Position {
        self.line_index.position_at(&self.text, byte_offset)
    }

    pub fn range(&self) -> Range {
        self.line_index.range(&self.text)
    }

    /// Line text without its terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        let (start, end) = self.line_index.line_bounds(&self.text, line as usize)?;
        Some(&self.text[start..end])
    }

    /// Text of `position`'s line up to the cursor.
    pub fn line_prefix(&self, position: Position) -> Option<&str> {
        let offset = self.offset(position)?;
        let (start, _) = self.line_index.line_bounds(&self.text, position.line as usize)?;
        Some(&self.text[start..offset])
    }

    /// The word touching the cursor. A cursor sitting right after the last
    /// character still counts as being on the word, and one on an opening
    /// quote reads the quoted word.
    pub fn word_at(&self, position: Position) -> Option<Word<'_>> {
        let offset = self.offset(position)?;
        let (start, _) = self.line_index.line_bounds(&self.text, position.line as usize)?;
        let line = self.line(position.line)?;
        let column = offset - start;
        let on_quote = line.as_bytes().get(column) == Some(&b'"');

        WORD.find_iter(line)
            .find(|m| {
                (m.start() <= column && column <= m.end()) || (on_quote && m.start() == column + 1)
            })
            .map(|m| Word {
                text: m.as_str(),
                start: m.start(),
                end: m.end(),
            })
    }
}

#[derive(Debug, Clone)]
struct LineIndex {
    line_starts: Vec<LineOffset>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, ch) in text.char_indices() {
            if ch == '\n' {
                line_starts.push(idx + 1);
            }
        }
        Self { line_starts }
    }

    fn line_bounds(&self, text: &str, line: usize) -> Option<(usize, usize)> {
        let line_start = *self.line_starts.get(line)?;
        let mut line_end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(text.len());
        let bytes = text.as_bytes();
        if line_end > line_start && bytes[line_end - 1] == b'\n' {
            line_end -= 1;
        }
        if line_end > line_start && bytes[line_end - 1] == b'\r' {
            line_end -= 1;
        }
        Some((line_start, line_end))
    }

    fn offset(&self, text: &str, position: Position) -> Option<usize> {
        let (line_start, line_end) = self.line_bounds(text, position.line as usize)?;
        let line_slice = &text[line_start..line_end];

        let mut current_units = 0u32;
        for (byte_idx, ch) in line_slice.char_indices() {
            if current_units == position.character {
                return Some(line_start + byte_idx);
            }
            current_units += ch.len_utf16() as u32;
        }

        if current_units == position.character {
            return Some(line_start + line_slice.len());
        }

        None
    }

    fn position_at(&self, text: &str, byte_offset: usize) -> Position {
        let clamped = byte_offset.min(text.len());
        let line = self.line_for_offset(clamped);
        let line_start = *self.line_starts.get(line).unwrap_or(&0);
        let column_bytes = clamped.saturating_sub(line_start);
        let line_slice = &text[line_start..(line_start + column_bytes).min(text.len())];
        let column_units = line_slice.chars().map(|ch| ch.len_utf16() as u32).sum();

        Position {
            line: line as u32,
            character: column_units,
        }
    }

    fn range(&self, text: &str) -> Range {
        let line_index = self.line_starts.len().saturating_sub(1) as u32;
        let last_start = self.line_starts.last().copied().unwrap_or(0);
        let last_len = if text.ends_with('\n') {
            0
        } else {
            text[last_start..]
                .chars()
                .map(|ch| ch.len_utf16() as u32)
                .sum()
        };

        Range {
            start: Position {
                line: 0,
                character: 0,
            },
            end: Position {
                line: line_index,
                character: last_len,
            },
        }
    }

    fn line_for_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next_line) => next_line.saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32, character: u32) -> Position {
        Position { line, character }
    }

    #[test]
    fn finds_word_under_cursor() {
        let doc = Document::new("brave = {\n\tcategory = personality\n}\n".to_string());
        assert_eq!(doc.word_at(pos(1, 3)).unwrap().text, "category");
        assert_eq!(doc.word_at(pos(1, 14)).unwrap().text, "personality");
        // Cursor right after the word.
        assert_eq!(doc.word_at(pos(0, 5)).unwrap().text, "brave");
        assert!(doc.word_at(pos(0, 7)).is_none());
    }

    #[test]
    fn opening_quote_reads_quoted_word() {
        let doc = Document::new("name = \"Harald\"\n".to_string());
        let word = doc.word_at(pos(0, 7)).unwrap();
        assert_eq!(word.text, "Harald");
        assert_eq!(word.start, 8);
    }

    #[test]
    fn words_keep_scope_chains_and_signs() {
        let doc = Document::new("exists = scope:target.father\nhealth = -2\n".to_string());
        assert_eq!(doc.word_at(pos(0, 12)).unwrap().text, "scope:target.father");
        assert_eq!(doc.word_at(pos(1, 10)).unwrap().text, "-2");
    }

    #[test]
    fn lines_drop_carriage_returns() {
        let doc = Document::new("a = 1\r\nb = 2".to_string());
        assert_eq!(doc.line(0), Some("a = 1"));
        assert_eq!(doc.line(1), Some("b = 2"));
        assert_eq!(doc.line_prefix(pos(1, 3)), Some("b ="));
        assert_eq!(doc.line(2), None);
    }

    #[test]
    fn converts_utf16_positions() {
        let doc = Document::new("name = \"Åsa\"\nx = 1\n".to_string());
        let offset = doc.offset(pos(0, 11)).unwrap();
        assert_eq!(&doc.text()[offset..offset + 1], "\"");
        assert_eq!(doc.position_at(offset), pos(0, 11));
    }
}
