use crate::blocks::assignments;
use crate::registry::SchemaRegistry;
use crate::schema::modifiers::MODIFIER_SCHEMA;
use crate::schema::FieldType;
use crate::text::Document;
use crate::validator::{validate, SyntaxIssue};
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};

pub const SOURCE: &str = "ck3-lsp";

fn diagnostic(range: Range, severity: DiagnosticSeverity, code: &str, message: String) -> Diagnostic {
    Diagnostic {
        range,
        severity: Some(severity),
        code: Some(NumberOrString::String(code.to_string())),
        code_description: None,
        source: Some(SOURCE.to_string()),
        message,
        related_information: None,
        tags: None,
        data: None,
    }
}

/// LSP position of a 1-based line and 1-based character column.
fn issue_position(document: &Document, issue: &SyntaxIssue) -> Position {
    let line = issue.line.saturating_sub(1) as u32;
    let character = document
        .line(line)
        .map(|text| {
            text.chars()
                .take(issue.column.saturating_sub(1))
                .map(|ch| ch.len_utf16() as u32)
                .sum()
        })
        .unwrap_or_default();
    Position { line, character }
}

pub fn syntax_diagnostics(document: &Document) -> Vec<Diagnostic> {
    validate(document.text())
        .iter()
        .map(|issue| {
            let start = issue_position(document, issue);
            let end = Position {
                character: start.character + 1,
                ..start
            };
            diagnostic(
                Range { start, end },
                DiagnosticSeverity::ERROR,
                issue.kind.label(),
                issue.message.clone(),
            )
        })
        .collect()
}

/// Values that are resolved by the game at load time rather than taken
/// literally: scopes, script constants and macro parameters.
fn is_indirect_value(value: &str) -> bool {
    value.starts_with('@') || value.starts_with('$') || value.contains(':')
}

/// Unknown keys in entity bodies and enum values outside their declared set.
///
/// Keys are only checked directly inside a top-level entity, where the
/// context schema describes the whole body. Contexts with a wildcard accept
/// anything. Entity bodies may also carry modifiers.
pub fn schema_diagnostics(
    registry: &SchemaRegistry,
    path: &str,
    document: &Document,
) -> Vec<Diagnostic> {
    let Some(entry) = registry.entry_for_file(path) else {
        return Vec::new();
    };
    let modifiers = registry.schema_map(MODIFIER_SCHEMA);
    let mut diagnostics = Vec::new();

    for assignment in assignments(document.text()) {
        let schema = registry.schema_map_for_context(path, &assignment.path);
        let Some(schema) = schema.filter(|schema| !schema.is_empty()) else {
            continue;
        };
        let range = Range {
            start: document.position_at(assignment.key_offset),
            end: document.position_at(assignment.key_offset + assignment.key.len()),
        };

        match schema.get(&assignment.key) {
            Some(field) if field.field_type == FieldType::Enum && !field.values.is_empty() => {
                let Some(value) = assignment.value.as_deref() else {
                    continue;
                };
                if !field.values.contains(&value) && !is_indirect_value(value) {
                    diagnostics.push(diagnostic(
                        range,
                        DiagnosticSeverity::WARNING,
                        "invalid_value",
                        format!(
                            "`{}` is not a valid value for `{}`. Expected one of: {}",
                            value,
                            assignment.key,
                            field.values.join(", ")
                        ),
                    ));
                }
            }
            Some(_) => {}
            None => {
                if assignment.path.len() != 1 || modifiers.get(&assignment.key).is_some() {
                    continue;
                }
                diagnostics.push(diagnostic(
                    range,
                    DiagnosticSeverity::WARNING,
                    "unknown_field",
                    format!("Unknown field `{}` for {}", assignment.key, entry.file_type),
                ));
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAITS: &str = "/mod/common/traits/00_traits.txt";

    #[test]
    fn converts_syntax_issues_to_zero_based_ranges() {
        let document = Document::new("a = {\n\tname = \"Åsa\" } }\n".to_string());
        let diagnostics = syntax_diagnostics(&document);
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.range.start, Position { line: 1, character: 16 });
        assert_eq!(diagnostic.message, "Unmatched closing brace");
        assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(
            diagnostic.code,
            Some(NumberOrString::String("unmatched_closing_brace".into()))
        );
    }

    #[test]
    fn flags_unknown_keys_in_entity_bodies() {
        let registry = SchemaRegistry::default();
        let document = Document::new(
            "brave = {\n\tcategory = personality\n\tdiplomacy = 2\n\tcolour = red\n\tpotential = { is_adult = yes }\n}\n"
                .to_string(),
        );
        let diagnostics = schema_diagnostics(&registry, TRAITS, &document);
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["Unknown field `colour` for trait"]);
        assert_eq!(diagnostics[0].range.start, Position { line: 3, character: 1 });
    }

    #[test]
    fn flags_enum_values_outside_declared_set() {
        let registry = SchemaRegistry::default();
        let document = Document::new(
            "brave = {\n\tcategory = personalty\n\tvalid_sex = scope:x\n}\n".to_string(),
        );
        let diagnostics = schema_diagnostics(&registry, TRAITS, &document);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("`personalty` is not a valid value"));
    }

    #[test]
    fn wildcard_contexts_and_unknown_files_are_silent() {
        let registry = SchemaRegistry::default();
        let document = Document::new("namespace = my\nmy.1 = {\n\ttype = character_event\n}\n".to_string());
        assert!(schema_diagnostics(&registry, "/mod/events/my.txt", &document).is_empty());
        assert!(schema_diagnostics(&registry, "/mod/gfx/x.txt", &document).is_empty());
    }
}
