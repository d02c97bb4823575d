//! Completion candidates for the cursor position.

use crate::blocks::{block_path_at, ScriptContext};
use crate::catalog::blocks::{is_weight_block, BlockParameter, IteratorKind, WEIGHT_PARAMETERS};
use crate::catalog::effects::EFFECTS;
use crate::catalog::triggers::TRIGGERS;
use crate::catalog::{effect, trigger, ScriptCommand};
use crate::registry::SchemaRegistry;
use crate::schema::{FieldSchema, FieldType, BOOLEAN_VALUES};
use crate::symbols::{SymbolKind, SymbolStore};
use crate::text::Document;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, MarkupContent, MarkupKind, Position,
};

/// `key =` with an optional partial value, at the end of the line prefix.
static VALUE_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z0-9_.:@$'-]+)"?\s*\??=\s*"?[A-Za-z0-9_]*$"#)
        .expect("value position pattern is valid")
});

pub fn completions(
    registry: &SchemaRegistry,
    symbols: &SymbolStore,
    path: &str,
    document: &Document,
    position: Position,
) -> Vec<CompletionItem> {
    let Some(offset) = document.offset(position) else {
        return Vec::new();
    };
    let block_path = block_path_at(document.text(), offset);
    let schema = registry.schema_for_context(path, &block_path);

    if let Some(key) = document
        .line_prefix(position)
        .and_then(|prefix| VALUE_POSITION.captures(prefix))
        .and_then(|captures| captures.get(1))
    {
        let field = registry.schema_map(schema).get(key.as_str());
        return field.map(value_completions).unwrap_or_default();
    }

    let mut items = Completions::default();
    for field in schema.iter().filter(|field| !field.is_wildcard) {
        items.push(field_item(field));
    }

    if let Some(parent) = block_path.last() {
        for parameter in block_parameters(parent) {
            items.push(parameter_item(parent, parameter));
        }
        if let Some(command) = effect(parent).or_else(|| trigger(parent)) {
            for name in command.parameters {
                items.push(CompletionItem {
                    label: name.to_string(),
                    kind: Some(CompletionItemKind::VARIABLE),
                    detail: Some(format!("parameter of {}", command.name)),
                    ..Default::default()
                });
            }
        }
    }

    match ScriptContext::from_block_path(&block_path) {
        ScriptContext::Trigger => {
            for command in TRIGGERS {
                items.push(command_item("trigger", command));
            }
            items.extend_symbols(symbols, SymbolKind::ScriptedTrigger);
        }
        ScriptContext::Effect => {
            for command in EFFECTS {
                items.push(command_item("effect", command));
            }
            items.extend_symbols(symbols, SymbolKind::ScriptedEffect);
        }
        ScriptContext::Neutral => {}
    }

    items.into_vec()
}

fn block_parameters(parent: &str) -> &'static [BlockParameter] {
    if is_weight_block(parent) {
        WEIGHT_PARAMETERS
    } else {
        IteratorKind::of(parent)
            .map(IteratorKind::parameters)
            .unwrap_or_default()
    }
}

/// Items deduplicated by label, first one wins.
#[derive(Default)]
struct Completions {
    seen: HashSet<String>,
    items: Vec<CompletionItem>,
}

impl Completions {
    fn push(&mut self, item: CompletionItem) {
        if self.seen.insert(item.label.clone()) {
            self.items.push(item);
        }
    }

    fn extend_symbols(&mut self, symbols: &SymbolStore, kind: SymbolKind) {
        let index = symbols.index(kind);
        let mut names: Vec<_> = index
            .definitions_iter()
            .map(|entry| (entry.key().clone(), entry.value().location.uri.to_string()))
            .collect();
        names.sort();
        for (name, uri) in names {
            self.push(CompletionItem {
                label: name.clone(),
                kind: Some(CompletionItemKind::CONSTANT),
                detail: Some(format!("{}: {}", kind.label(), name)),
                documentation: Some(Documentation::String(format!("Defined in: {}", uri))),
                ..Default::default()
            });
        }
    }

    fn into_vec(self) -> Vec<CompletionItem> {
        self.items
    }
}

fn markdown(value: String) -> Option<Documentation> {
    Some(Documentation::MarkupContent(MarkupContent {
        kind: MarkupKind::Markdown,
        value,
    }))
}

fn value_completions(field: &FieldSchema) -> Vec<CompletionItem> {
    let values = match field.field_type {
        FieldType::Boolean => BOOLEAN_VALUES,
        _ => field.values,
    };
    values
        .iter()
        .map(|value| CompletionItem {
            label: value.to_string(),
            kind: Some(CompletionItemKind::ENUM_MEMBER),
            detail: Some(format!("{} value", field.name)),
            preselect: field.default.map(|default| default == *value),
            ..Default::default()
        })
        .collect()
}

fn field_item(field: &FieldSchema) -> CompletionItem {
    CompletionItem {
        label: field.name.to_string(),
        kind: Some(CompletionItemKind::PROPERTY),
        detail: Some(field.field_type.label().to_string()),
        documentation: markdown(field.description.to_string()),
        ..Default::default()
    }
}

fn parameter_item(parent: &str, parameter: &BlockParameter) -> CompletionItem {
    CompletionItem {
        label: parameter.name.to_string(),
        kind: Some(CompletionItemKind::VARIABLE),
        detail: Some(format!("parameter of {}", parent)),
        documentation: parameter
            .description
            .and_then(|description| markdown(description.to_string())),
        ..Default::default()
    }
}

fn command_item(label: &str, command: &ScriptCommand) -> CompletionItem {
    CompletionItem {
        label: command.name.to_string(),
        kind: Some(CompletionItemKind::FUNCTION),
        detail: Some(format!("{} ({})", label, command.scopes)),
        documentation: markdown(command.description.to_string()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{SymbolDefinition, SymbolLocation, SymbolMetadata};
    use tower_lsp::lsp_types::{Range, Url};

    const TRAITS: &str = "/mod/common/traits/00_traits.txt";
    const EVENTS: &str = "/mod/events/my_events.txt";

    fn complete_with(symbols: &SymbolStore, path: &str, source: &str) -> Vec<String> {
        let offset = source.find('|').expect("cursor marker");
        let document = Document::new(source.replacen('|', "", 1));
        let position = document.position_at(offset);
        completions(&SchemaRegistry::default(), symbols, path, &document, position)
            .into_iter()
            .map(|item| item.label)
            .collect()
    }

    fn complete(path: &str, source: &str) -> Vec<String> {
        complete_with(&SymbolStore::default(), path, source)
    }

    #[test]
    fn offers_enum_values_after_equals() {
        let labels = complete(TRAITS, "brave = {\n\tcategory = |\n}\n");
        assert_eq!(labels.first().map(String::as_str), Some("personality"));
        assert!(labels.contains(&"health".to_string()));
        assert!(!labels.contains(&"category".to_string()));
    }

    #[test]
    fn offers_booleans_for_boolean_fields() {
        let labels = complete(TRAITS, "brave = {\n\tgenetic = y|\n}\n");
        assert_eq!(labels, vec!["yes", "no"]);
    }

    #[test]
    fn offers_schema_fields_without_wildcards() {
        let labels = complete(EVENTS, "|");
        assert_eq!(labels, vec!["namespace"]);

        let labels = complete(TRAITS, "brave = {\n\t|\n}\n");
        assert!(labels.contains(&"category".to_string()));
        assert!(labels.contains(&"opposites".to_string()));
    }

    #[test]
    fn trigger_context_offers_triggers_only() {
        let labels = complete(EVENTS, "my.1 = {\n\ttrigger = {\n\t\t|\n\t}\n}\n");
        assert!(labels.contains(&"is_adult".to_string()));
        assert!(!labels.contains(&"add_gold".to_string()));
    }

    #[test]
    fn effect_context_offers_effects_and_scripted_effects() {
        let symbols = SymbolStore::default();
        symbols.scripted_effects.insert_definition(
            "grant_reward_effect".into(),
            SymbolDefinition {
                location: SymbolLocation {
                    uri: Url::parse("file:///mod/common/scripted_effects/r.txt").unwrap(),
                    range: Range::default(),
                },
                metadata: SymbolMetadata::default(),
            },
        );
        let labels = complete_with(
            &symbols,
            EVENTS,
            "my.1 = {\n\toption = {\n\t\tif = {\n\t\t\t|\n",
        );
        assert!(labels.contains(&"add_gold".to_string()));
        assert!(labels.contains(&"grant_reward_effect".to_string()));
        assert!(!labels.contains(&"is_adult".to_string()));
    }

    #[test]
    fn iterator_blocks_offer_their_parameters() {
        let labels = complete(EVENTS, "my.1 = {\n\timmediate = {\n\t\trandom_vassal = {\n\t\t\t|\n");
        assert!(labels.contains(&"weight".to_string()));
        assert!(labels.contains(&"alternative_limit".to_string()));
        assert_eq!(labels.iter().filter(|label| *label == "limit").count(), 1);
    }

    #[test]
    fn weight_blocks_offer_weight_parameters() {
        let labels = complete(EVENTS, "my.1 = {\n\toption = {\n\t\tai_chance = {\n\t\t\t|\n");
        assert!(labels.contains(&"base".to_string()));
        assert!(labels.contains(&"modifier".to_string()));
        assert!(!labels.contains(&"add_gold".to_string()));
    }
}
