use crate::backend::Backend;
use crate::blocks::{assignments, Assignment, ScriptContext};
use crate::catalog::blocks::{classify, BlockKind};
use crate::catalog::{effect, trigger};
use crate::diagnostics::{schema_diagnostics, syntax_diagnostics, SOURCE};
use crate::error::{Error, Result};
use crate::symbols::{
    SymbolDefinition, SymbolKind, SymbolLocation, SymbolMetadata, SymbolOccurrence,
    SymbolReference,
};
use crate::text::Document;
use crate::validator::read_script;
use regex::Regex;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::LazyLock;
use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticSeverity, InitializeParams, NumberOrString, Position, Range, Url,
};
use walkdir::WalkDir;

/// `$PARAM$` substitution inside scripted effects and triggers.
static MACRO_PARAMETER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z0-9_]+)\$").expect("parameter pattern is valid"));

/// Filesystem path of a document as the registry sees it. Non-file URIs
/// fall back to their path component.
pub(crate) fn document_path(uri: &Url) -> String {
    match uri.to_file_path() {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(()) => uri.path().to_string(),
    }
}

impl Backend {
    pub(crate) fn update_workspace_roots(&self, params: &InitializeParams) {
        let mut roots = self.workspace_roots.write();
        roots.clear();

        if let Some(root_uri) = params.root_uri.as_ref() {
            if let Ok(path) = root_uri.to_file_path() {
                if !roots.iter().any(|existing| existing == &path) {
                    roots.push(path);
                }
            }
        }

        #[allow(deprecated)]
        if let Some(root_path) = params.root_path.as_ref() {
            if !root_path.is_empty() {
                let path = PathBuf::from(root_path);
                if !roots.iter().any(|existing| existing == &path) {
                    roots.push(path);
                }
            }
        }

        if let Some(folders) = params.workspace_folders.as_ref() {
            for folder in folders {
                if let Ok(path) = folder.uri.to_file_path() {
                    if !roots.iter().any(|existing| existing == &path) {
                        roots.push(path);
                    }
                }
            }
        }

        tracing::debug!(roots = ?*roots, "workspace roots updated");
    }

    /// Indexes every script file under the workspace roots that contain
    /// `uri`, skipping documents already known.
    pub(crate) fn scan_workspace(&self, uri: &Url) -> Result<usize> {
        let file_path = uri
            .to_file_path()
            .map_err(|()| Error::InvalidUri(uri.to_string()))?;

        let directories: Vec<PathBuf> = {
            let roots = self.workspace_roots.read();
            if roots.is_empty() {
                file_path
                    .parent()
                    .map(|dir| vec![dir.to_path_buf()])
                    .unwrap_or_default()
            } else {
                let mut dirs: Vec<PathBuf> = roots
                    .iter()
                    .filter(|root| file_path.starts_with(root))
                    .cloned()
                    .collect();

                if dirs.is_empty() {
                    dirs.extend(roots.iter().cloned());
                }

                dirs
            }
        };

        let mut visited_dirs = HashSet::new();
        let mut indexed = 0;

        for dir in directories {
            if !visited_dirs.insert(dir.clone()) || !dir.exists() {
                continue;
            }

            for entry in WalkDir::new(&dir)
                .follow_links(false)
                .into_iter()
                .filter_map(|entry| entry.ok())
            {
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.into_path();
                if path.extension().and_then(|s| s.to_str()) != Some("txt") {
                    continue;
                }
                if self
                    .registry
                    .entry_for_file(&path.to_string_lossy())
                    .is_none()
                {
                    continue;
                }
                let Ok(uri) = Url::from_file_path(&path) else {
                    continue;
                };
                if self.documents.contains_key(uri.as_str()) {
                    continue;
                }
                match read_script(&path) {
                    Ok(content) => {
                        self.analyze_document(&uri, &content);
                        indexed += 1;
                    }
                    Err(err) => tracing::warn!(error = %err, "skipping workspace file"),
                }
            }
        }

        Ok(indexed)
    }

    /// Stores the document and re-indexes the definitions and references
    /// it contains.
    pub(crate) fn analyze_document(&self, uri: &Url, text: &str) {
        let uri_str = uri.to_string();
        let document = Document::new(text.to_string());
        let path = document_path(uri);
        let defining_kind = self
            .registry
            .entry_for_file(&path)
            .and_then(|entry| SymbolKind::from_file_type(entry.file_type));

        self.symbols.clear_document(uri);
        let found = assignments(text);
        let mut occurrences = Vec::new();

        for (idx, assignment) in found.iter().enumerate() {
            if let Some(kind) = defining_kind.filter(|_| is_definition(assignment)) {
                let range = key_range(&document, assignment);
                let body_end = found[idx + 1..]
                    .iter()
                    .find(|next| next.path.is_empty())
                    .map(|next| next.key_offset)
                    .unwrap_or(text.len());
                let metadata = definition_metadata(
                    kind,
                    &assignment.key,
                    &text[assignment.key_offset..body_end],
                    &found,
                );

                self.symbols.index(kind).insert_definition(
                    assignment.key.clone(),
                    SymbolDefinition {
                        location: SymbolLocation {
                            uri: uri.clone(),
                            range,
                        },
                        metadata,
                    },
                );
                occurrences.push(SymbolOccurrence {
                    kind,
                    id: assignment.key.clone(),
                    range,
                });
                continue;
            }

            if let Some((kind, id, range)) = reference(&document, assignment) {
                self.symbols.index(kind).add_reference(
                    id.clone(),
                    SymbolReference {
                        location: SymbolLocation {
                            uri: uri.clone(),
                            range,
                        },
                    },
                );
                occurrences.push(SymbolOccurrence { kind, id, range });
            }
        }

        tracing::trace!(uri = %uri_str, occurrences = occurrences.len(), "indexed document");
        self.document_symbols.insert(uri_str.clone(), occurrences);
        self.documents.insert(uri_str, document);
    }

    pub(crate) fn get_symbol_at_position(
        &self,
        uri: &Url,
        position: Position,
    ) -> Option<(SymbolKind, String)> {
        let uri_str = uri.to_string();
        if let Some(occurrences) = self.document_symbols.get(&uri_str) {
            for occurrence in occurrences.iter() {
                if range_contains(&occurrence.range, position) {
                    return Some((occurrence.kind, occurrence.id.clone()));
                }
            }
        }

        let doc = self.documents.get(&uri_str)?;
        let word = doc.word_at(position)?.text.to_string();
        drop(doc);
        self.symbols
            .find_definition(&word)
            .map(|(kind, _)| (kind, word))
    }

    pub(crate) async fn check_diagnostics(&self, uri: &Url) {
        let uri_str = uri.to_string();
        let settings = self.settings.read().clone();
        let Some(doc) = self.documents.get(&uri_str) else {
            return;
        };

        let mut diagnostics = Vec::new();
        if settings.syntax_diagnostics {
            diagnostics.extend(syntax_diagnostics(&doc));
        }
        if settings.schema_diagnostics {
            diagnostics.extend(schema_diagnostics(&self.registry, &document_path(uri), &doc));
        }
        drop(doc);

        for kind in SymbolKind::ALL {
            let index = self.symbols.index(kind);
            for entry in index.duplicate_definitions_iter() {
                let Some(original) = index.definition(entry.key()) else {
                    continue;
                };
                for duplicate in entry.value() {
                    if duplicate.location.uri == *uri {
                        diagnostics.push(Diagnostic {
                            range: duplicate.location.range,
                            severity: Some(DiagnosticSeverity::WARNING),
                            code: Some(NumberOrString::String("duplicate_definition".into())),
                            code_description: None,
                            source: Some(SOURCE.to_string()),
                            message: format!(
                                "{} '{}' is already defined in {}",
                                kind.label(),
                                entry.key(),
                                original.location.uri
                            ),
                            related_information: None,
                            tags: None,
                            data: None,
                        });
                    }
                }
            }
        }

        self.client
            .publish_diagnostics(uri.clone(), diagnostics, None)
            .await;
    }
}

/// Top-level `key = {` in a defining file. `namespace` declares ids but is
/// not one.
fn is_definition(assignment: &Assignment) -> bool {
    assignment.path.is_empty() && assignment.opens_block && assignment.key != "namespace"
}

fn definition_metadata(
    kind: SymbolKind,
    id: &str,
    body: &str,
    found: &[Assignment],
) -> SymbolMetadata {
    match kind {
        SymbolKind::ScriptedEffect | SymbolKind::ScriptedTrigger => {
            let mut parameters: Vec<String> = Vec::new();
            for captures in MACRO_PARAMETER.captures_iter(body) {
                let name = &captures[1];
                if !parameters.iter().any(|existing| existing == name) {
                    parameters.push(name.to_string());
                }
            }
            SymbolMetadata {
                parameters,
                ..SymbolMetadata::default()
            }
        }
        SymbolKind::Event => {
            let field = |key: &str| {
                found
                    .iter()
                    .find(|assignment| {
                        assignment.key == key
                            && matches!(assignment.path.as_slice(), [owner] if owner == id)
                    })
                    .and_then(|assignment| assignment.value.clone())
            };
            SymbolMetadata {
                event_type: field("type"),
                title: field("title"),
                ..SymbolMetadata::default()
            }
        }
    }
}

/// A use of a workspace symbol: an event fired by `trigger_event`, or a
/// scripted effect or trigger called as `name = yes` or `name = { ... }`.
fn reference(document: &Document, assignment: &Assignment) -> Option<(SymbolKind, String, Range)> {
    let fires_event = assignment.key == "trigger_event"
        || (assignment.key == "id"
            && assignment.path.last().map(String::as_str) == Some("trigger_event"));
    if fires_event {
        let value = assignment.value.as_ref()?;
        let start = assignment.value_offset?;
        let range = Range {
            start: document.position_at(start),
            end: document.position_at(start + value.len()),
        };
        return Some((SymbolKind::Event, value.clone(), range));
    }

    if assignment.path.is_empty()
        || !(assignment.opens_block || assignment.value.as_deref() == Some("yes"))
        || classify(&assignment.key) != BlockKind::Unknown
        || effect(&assignment.key).is_some()
        || trigger(&assignment.key).is_some()
    {
        return None;
    }
    let kind = match ScriptContext::from_block_path(&assignment.path) {
        ScriptContext::Effect => SymbolKind::ScriptedEffect,
        ScriptContext::Trigger => SymbolKind::ScriptedTrigger,
        ScriptContext::Neutral => return None,
    };
    Some((kind, assignment.key.clone(), key_range(document, assignment)))
}

fn key_range(document: &Document, assignment: &Assignment) -> Range {
    Range {
        start: document.position_at(assignment.key_offset),
        end: document.position_at(assignment.key_offset + assignment.key.len()),
    }
}

fn range_contains(range: &Range, position: Position) -> bool {
    if position.line < range.start.line || position.line > range.end.line {
        return false;
    }
    if position.line == range.start.line && position.character < range.start.character {
        return false;
    }
    if position.line == range.end.line && position.character > range.end.character {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32, character: u32) -> Position {
        Position { line, character }
    }

    #[test]
    fn definitions_skip_namespace_and_nested_blocks() {
        let found = assignments("namespace = my\nmy.1 = {\n\toption = { }\n}\n");
        let definitions: Vec<_> = found
            .iter()
            .filter(|a| is_definition(a))
            .map(|a| a.key.as_str())
            .collect();
        assert_eq!(definitions, vec!["my.1"]);
    }

    #[test]
    fn collects_macro_parameters_once() {
        let text = "give_effect = {\n\tadd_gold = $AMOUNT$\n\tadd_prestige = $AMOUNT$\n\tadd_piety = $PIETY$\n}\n";
        let metadata =
            definition_metadata(SymbolKind::ScriptedEffect, "give_effect", text, &assignments(text));
        assert_eq!(metadata.parameters, vec!["AMOUNT", "PIETY"]);
    }

    #[test]
    fn reads_event_type_and_title() {
        let text = "my.1 = {\n\ttype = letter_event\n\ttitle = my.1.t\n\toption = { title = x }\n}\n";
        let metadata = definition_metadata(SymbolKind::Event, "my.1", text, &assignments(text));
        assert_eq!(metadata.event_type.as_deref(), Some("letter_event"));
        assert_eq!(metadata.title.as_deref(), Some("my.1.t"));
    }

    #[test]
    fn finds_event_and_scripted_references() {
        let text = "my.1 = {\n\timmediate = {\n\t\ttrigger_event = { id = my.2 days = 1 }\n\t\tgive_effect = yes\n\t\tadd_gold = 5\n\t}\n\ttrigger = { is_valid_trigger = yes }\n}\n";
        let document = Document::new(text.to_string());
        let refs: Vec<_> = assignments(text)
            .iter()
            .filter_map(|a| reference(&document, a))
            .map(|(kind, id, _)| (kind, id))
            .collect();
        assert_eq!(
            refs,
            vec![
                (SymbolKind::Event, "my.2".to_string()),
                (SymbolKind::ScriptedEffect, "give_effect".to_string()),
                (SymbolKind::ScriptedTrigger, "is_valid_trigger".to_string()),
            ]
        );
    }

    #[test]
    fn range_contains_is_inclusive() {
        let range = Range {
            start: pos(1, 2),
            end: pos(1, 6),
        };
        assert!(range_contains(&range, pos(1, 2)));
        assert!(range_contains(&range, pos(1, 6)));
        assert!(!range_contains(&range, pos(1, 7)));
        assert!(!range_contains(&range, pos(0, 3)));
    }
}
