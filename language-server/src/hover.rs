//! Hover documentation.
//!
//! One ordered cascade, first match wins: schema field, schema value, trait
//! category, stat, block parameter, effect, trigger, workspace symbol.

use crate::blocks::{assignments, block_path_at};
use crate::catalog::blocks::{iterator_parameter, weight_parameter};
use crate::catalog::stats::{magnitude_band, stat, trait_category, Described};
use crate::catalog::{effect, trigger, ScriptCommand};
use crate::registry::SchemaRegistry;
use crate::schema::{FieldSchema, FieldType, SchemaMap};
use crate::symbols::{sanitize_markdown, SymbolDefinition, SymbolKind, SymbolStore};
use crate::text::{Document, Word};
use tower_lsp::lsp_types::Position;

/// What the hovered word is to the assignment around it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Key(String),
    Value { key: String, value: String },
}

/// Spans are raw token spans, quotes included.
fn target_at(line: &str, word: &Word<'_>) -> Option<Target> {
    let covers = |start: usize, end: usize| start <= word.start && word.start < end;

    assignments(line).into_iter().find_map(|assignment| {
        if covers(assignment.key_offset, assignment.key_end) {
            return Some(Target::Key(assignment.key));
        }
        match (assignment.value, assignment.value_offset, assignment.value_end) {
            (Some(value), Some(start), Some(end)) if covers(start, end) => Some(Target::Value {
                key: assignment.key,
                value,
            }),
            _ => None,
        }
    })
}

pub fn hover(
    registry: &SchemaRegistry,
    symbols: &SymbolStore,
    path: &str,
    document: &Document,
    position: Position,
) -> Option<String> {
    let word = document.word_at(position)?;
    let offset = document.offset(position)?;
    let line = document.line(position.line)?;
    let target = target_at(line, &word);
    let block_path = block_path_at(document.text(), offset);
    let schema = registry.schema_map_for_context(path, &block_path);
    let scope = registry
        .entry_for_file(path)
        .and_then(|entry| entry.initial_scope);

    let cascade = Cascade {
        word: word.text,
        target: target.as_ref(),
        parent: block_path.last().map(String::as_str),
        schema: schema.as_deref(),
        scope,
        symbols,
    };
    cascade.resolve()
}

struct Cascade<'a> {
    word: &'a str,
    target: Option<&'a Target>,
    parent: Option<&'a str>,
    schema: Option<&'a SchemaMap>,
    scope: Option<&'static str>,
    symbols: &'a SymbolStore,
}

impl Cascade<'_> {
    fn resolve(&self) -> Option<String> {
        self.schema_field()
            .or_else(|| self.schema_value())
            .or_else(|| trait_category(self.word).map(category_hover))
            .or_else(|| self.stat())
            .or_else(|| self.block_parameter())
            .or_else(|| effect(self.word).map(|command| command_hover("Effect", command)))
            .or_else(|| trigger(self.word).map(|command| command_hover("Trigger", command)))
            .or_else(|| self.workspace_symbol())
    }

    fn schema_field(&self) -> Option<String> {
        let Some(Target::Key(key)) = self.target else {
            return None;
        };
        let field = self.schema?.get(key)?;
        Some(field_hover(field, self.scope))
    }

    fn schema_value(&self) -> Option<String> {
        let Some(Target::Value { key, value }) = self.target else {
            return None;
        };
        let field = self.schema?.get(key)?;
        value_hover(field, key, value)
    }

    fn stat(&self) -> Option<String> {
        match self.target {
            Some(Target::Value { key, value }) => stat(key)
                .and_then(|described| stat_value_hover(described, value))
                .or_else(|| stat(self.word).map(stat_hover)),
            _ => stat(self.word).map(stat_hover),
        }
    }

    fn block_parameter(&self) -> Option<String> {
        if matches!(self.target, Some(Target::Value { .. })) {
            return None;
        }
        let parent = self.parent?;
        let key = self.word;

        if let Some(parameter) = weight_parameter(parent, key) {
            let description = parameter.description.map(str::to_string).unwrap_or_else(|| {
                format!("Parameter of the `{}` weight calculation.", parent)
            });
            return Some(format!("**Parameter:** `{}`\n\n{}", key, description));
        }
        if let Some(parameter) = iterator_parameter(parent, key) {
            let description = parameter.description.unwrap_or_default();
            return Some(format!(
                "**Iterator parameter:** `{}`\n\n{}",
                key, description
            ));
        }
        let command = effect(parent)
            .or_else(|| trigger(parent))
            .filter(|command| command.has_parameter(key))?;
        Some(format!(
            "**Parameter:** `{}`\n\nParameter of `{}`: {}",
            key, command.name, command.description
        ))
    }

    fn workspace_symbol(&self) -> Option<String> {
        let (kind, definition) = self.symbols.find_definition(self.word)?;
        Some(symbol_hover(kind, self.word, &definition))
    }
}

pub fn field_hover(field: &FieldSchema, scope: Option<&str>) -> String {
    let mut header = format!("**Field:** `{}` ({}", field.name, field.field_type.label());
    if field.required {
        header.push_str(", required");
    }
    header.push(')');

    let mut lines = vec![header, String::new(), sanitize_markdown(field.description)];
    let mut details = Vec::new();
    if !field.values.is_empty() {
        details.push(format!("- Values: {}", field.values.join(", ")));
    } else if field.field_type == FieldType::Boolean {
        details.push("- Values: yes, no".to_string());
    }
    if let Some(default) = field.default {
        details.push(format!("- Default: `{}`", default));
    }
    match (field.min, field.max) {
        (Some(min), Some(max)) => details.push(format!("- Range: {} to {}", min, max)),
        (Some(min), None) => details.push(format!("- Minimum: {}", min)),
        (None, Some(max)) => details.push(format!("- Maximum: {}", max)),
        (None, None) => {}
    }
    if let Some(scope) = scope {
        details.push(format!("- Scope: {}", scope));
    }
    if !details.is_empty() {
        lines.push(String::new());
        lines.extend(details);
    }
    if let Some(example) = field.example {
        lines.push(String::new());
        lines.push(format!("```\n{}\n```", example));
    }
    lines.join("\n")
}

/// Commentary on `value` assigned to `field`. `None` when the field type has
/// nothing to say about its values.
pub fn value_hover(field: &FieldSchema, key: &str, value: &str) -> Option<String> {
    match field.field_type {
        FieldType::Enum if !field.values.is_empty() => {
            if field.values.contains(&value) {
                Some(format!("`{}` is a valid value for `{}`.", value, key))
            } else {
                Some(format!(
                    "`{}` is not a known value for `{}`. Expected one of: {}",
                    value,
                    key,
                    field.values.join(", ")
                ))
            }
        }
        FieldType::Boolean => Some(match value {
            "yes" => format!("`{}` is enabled.", key),
            "no" => format!("`{}` is disabled.", key),
            _ => format!("`{}` expects `yes` or `no`.", key),
        }),
        FieldType::Modifier => match stat(key) {
            Some(described) => stat_value_hover(described, value),
            None => {
                let number: f64 = value.parse().ok()?;
                Some(format!("Modifies `{}` by {:+}.", key, number))
            }
        },
        FieldType::Integer | FieldType::Float => {
            let Ok(number) = value.parse::<f64>() else {
                return Some(format!(
                    "`{}` takes a {}; `{}` is read as a script value.",
                    key,
                    field.field_type.label(),
                    value
                ));
            };
            Some(range_commentary(field, key, number))
        }
        _ => None,
    }
}

fn range_commentary(field: &FieldSchema, key: &str, number: f64) -> String {
    if field.field_type == FieldType::Integer && number.fract() != 0.0 {
        return format!("⚠ `{}` expects a whole number, got {}.", key, number);
    }
    if let Some(min) = field.min.filter(|min| number < *min) {
        return format!("⚠ {} is below the minimum of {} for `{}`.", number, min, key);
    }
    if let Some(max) = field.max.filter(|max| number > *max) {
        return format!("⚠ {} is above the maximum of {} for `{}`.", number, max, key);
    }
    match (field.min, field.max) {
        (Some(min), Some(max)) => format!("{} is within {} to {}.", number, min, max),
        _ => format!("`{}` = {}", key, number),
    }
}

/// Banded description of a numeric stat change. Non-numeric values yield
/// `None`.
pub fn stat_value_hover(described: &Described, value: &str) -> Option<String> {
    let number: f64 = value.trim().parse().ok()?;
    if number == 0.0 {
        return Some(format!("**{}:** 0\n\nNo effect.", described.label));
    }
    let direction = if number > 0.0 { "bonus" } else { "penalty" };
    Some(format!(
        "**{}:** {:+}\n\n{} {} to {}.",
        described.label,
        number,
        magnitude_band(number),
        direction,
        described.label
    ))
}

fn stat_hover(described: &Described) -> String {
    format!("**Stat:** {}\n\n{}", described.label, described.description)
}

fn category_hover(described: &Described) -> String {
    format!(
        "**Trait category:** {}\n\n{}",
        described.label, described.description
    )
}

pub fn command_hover(label: &str, command: &ScriptCommand) -> String {
    let mut lines = vec![
        format!("**{}:** `{}`", label, command.name),
        String::new(),
        sanitize_markdown(command.description),
        String::new(),
        format!("- Scopes: {}", command.scopes),
    ];
    if !command.parameters.is_empty() {
        lines.push(format!("- Parameters: {}", command.parameters.join(", ")));
    }
    if let Some(example) = command.example {
        lines.push(String::new());
        lines.push(format!("```\n{}\n```", example));
    }
    lines.join("\n")
}

pub fn symbol_hover(kind: SymbolKind, id: &str, definition: &SymbolDefinition) -> String {
    let mut lines = vec![format!("**{}:** {}", kind.label(), sanitize_markdown(id))];
    let metadata = &definition.metadata;
    if let Some(event_type) = &metadata.event_type {
        lines.push(format!("- Type: {}", sanitize_markdown(event_type)));
    }
    if let Some(title) = &metadata.title {
        lines.push(format!("- Title: {}", sanitize_markdown(title)));
    }
    if kind != SymbolKind::Event {
        lines.push(format!(
            "- Parameters: {}",
            if metadata.parameters.is_empty() {
                "(none)".to_string()
            } else {
                metadata
                    .parameters
                    .iter()
                    .map(|parameter| format!("${}$", parameter))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        ));
    }
    lines.push(format!("- Defined in: {}", definition.location.uri));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{SymbolLocation, SymbolMetadata};
    use tower_lsp::lsp_types::{Range, Url};

    const TRAITS: &str = "/mod/common/traits/00_traits.txt";
    const EVENTS: &str = "/mod/events/my_events.txt";

    /// Hovers at the `|` marker.
    fn hover_at(path: &str, source: &str) -> Option<String> {
        hover_with(&SymbolStore::default(), path, source)
    }

    fn hover_with(symbols: &SymbolStore, path: &str, source: &str) -> Option<String> {
        let offset = source.find('|').expect("cursor marker");
        let text = source.replacen('|', "", 1);
        let document = Document::new(text);
        let position = document.position_at(offset);
        hover(&SchemaRegistry::default(), symbols, path, &document, position)
    }

    #[test]
    fn documents_schema_fields() {
        let value = hover_at(TRAITS, "brave = {\n\tcate|gory = personality\n}\n").unwrap();
        assert!(value.contains("**Field:** `category` (enum, required)"));
        assert!(value.contains("- Values: personality, education"));
        assert!(value.contains("- Scope: character"));
    }

    #[test]
    fn schema_value_wins_over_trait_category() {
        let value = hover_at(TRAITS, "brave = {\n\tcategory = person|ality\n}\n").unwrap();
        assert_eq!(value, "`personality` is a valid value for `category`.");
    }

    #[test]
    fn compact_assignments_split_key_and_value() {
        let value = hover_at(TRAITS, "brave = {\n\tcategory=person|ality\n}\n").unwrap();
        assert_eq!(value, "`personality` is a valid value for `category`.");

        let key = hover_at(TRAITS, "brave = {\n\tcate|gory=personality\n}\n").unwrap();
        assert!(key.starts_with("**Field:** `category`"));

        let stat = hover_at(TRAITS, "brave = {\n\tdiplomacy=|2\n}\n").unwrap();
        assert!(stat.contains("Moderate bonus to Diplomacy"));
    }

    #[test]
    fn several_assignments_on_one_line() {
        let source = "brave = {\n\tcategory = personality| diplomacy = 2\n}\n";
        let value = hover_at(TRAITS, source).unwrap();
        assert_eq!(value, "`personality` is a valid value for `category`.");

        let source = "brave = {\n\tcategory = personality |diplomacy = 2\n}\n";
        let key = hover_at(TRAITS, source).unwrap();
        assert!(key.starts_with("**Stat:** Diplomacy"));

        let source = "brave = {\n\tcategory=personality diplomacy=|2\n}\n";
        let value = hover_at(TRAITS, source).unwrap();
        assert!(value.contains("**Diplomacy:** +2"));
    }

    #[test]
    fn quoted_value_from_its_opening_quote() {
        let value = hover_at(TRAITS, "brave = {\n\tcategory = |\"personality\"\n}\n").unwrap();
        assert_eq!(value, "`personality` is a valid value for `category`.");
    }

    #[test]
    fn falls_back_to_trait_category_outside_schemas() {
        let value = hover_at("/mod/notes.txt", "kind = lifes|tyle\n").unwrap();
        assert!(value.starts_with("**Trait category:** Lifestyle"));
    }

    #[test]
    fn flags_out_of_range_values() {
        let value = hover_at(TRAITS, "brave = {\n\tinherit_chance = 1|50\n}\n").unwrap();
        assert!(value.contains("above the maximum of 100"));
    }

    #[test]
    fn stats_use_magnitude_bands() {
        let name = hover_at(TRAITS, "brave = {\n\tdiplo|macy = 2\n}\n").unwrap();
        assert!(name.starts_with("**Stat:** Diplomacy"));

        let value = hover_at(TRAITS, "brave = {\n\tdiplomacy = |2\n}\n").unwrap();
        assert!(value.contains("Moderate bonus to Diplomacy"));

        let penalty = hover_at(TRAITS, "brave = {\n\tprowess = -|6\n}\n").unwrap();
        assert!(penalty.contains("**Prowess:** -6"));
        assert!(penalty.contains("Major penalty"));
    }

    #[test]
    fn modifier_fields_band_stat_values() {
        let value = hover_at(
            TRAITS,
            "brave = {\n\tculture_modifier = {\n\t\tparameter = x\n\t\tmartial = |5\n\t}\n}\n",
        )
        .unwrap();
        assert!(value.contains("Significant bonus to Martial"));
    }

    #[test]
    fn zero_stat_has_no_effect() {
        let described = stat("health").unwrap();
        let value = stat_value_hover(described, "0").unwrap();
        assert!(value.contains("No effect"));
        assert!(stat_value_hover(described, "1").unwrap().contains("Minor bonus"));
        assert!(stat_value_hover(described, "3").unwrap().contains("Moderate"));
        assert!(stat_value_hover(described, "5").unwrap().contains("Significant"));
        assert!(stat_value_hover(described, "6").unwrap().contains("Major"));
        assert!(stat_value_hover(described, "scope:x").is_none());
    }

    #[test]
    fn weight_parameters_have_fallback_prose() {
        let source = "my.1 = {\n\toption = {\n\t\tai_chance = {\n\t\t\tba|se = 10\n\t\t}\n\t}\n}\n";
        let value = hover_at(EVENTS, source).unwrap();
        assert!(value.contains("Starting value of the weight"));

        let source = "my.1 = {\n\toption = {\n\t\tai_chance = {\n\t\t\tde|sc = x\n\t\t}\n\t}\n}\n";
        let value = hover_at(EVENTS, source).unwrap();
        assert!(value.contains("Parameter of the `ai_chance` weight calculation."));
    }

    #[test]
    fn iterator_and_command_parameters() {
        let source = "my.1 = {\n\timmediate = {\n\t\tordered_vassal = {\n\t\t\torder_|by = gold\n";
        let value = hover_at(EVENTS, source).unwrap();
        assert!(value.starts_with("**Iterator parameter:** `order_by`"));

        let source = "my.1 = {\n\timmediate = {\n\t\ttrigger_event = { id = my.2 da|ys = 3 }\n";
        let value = hover_at(EVENTS, source).unwrap();
        assert!(value.contains("Parameter of `trigger_event`"));
    }

    #[test]
    fn effects_then_triggers() {
        let source = "my.1 = {\n\toption = {\n\t\tadd_go|ld = 100\n\t}\n}\n";
        let value = hover_at(EVENTS, source).unwrap();
        assert!(value.starts_with("**Effect:** `add_gold`"));
        assert!(value.contains("add_gold = 100"));

        let source = "my.1 = {\n\ttrigger = {\n\t\tis_ad|ult = yes\n\t}\n}\n";
        let value = hover_at(EVENTS, source).unwrap();
        assert!(value.starts_with("**Trigger:** `is_adult`"));
    }

    #[test]
    fn resolves_workspace_symbols_last() {
        let symbols = SymbolStore::default();
        symbols.scripted_effects.insert_definition(
            "grant_reward_effect".into(),
            SymbolDefinition {
                location: SymbolLocation {
                    uri: Url::parse("file:///mod/common/scripted_effects/rewards.txt").unwrap(),
                    range: Range::default(),
                },
                metadata: SymbolMetadata {
                    parameters: vec!["AMOUNT".into()],
                    ..SymbolMetadata::default()
                },
            },
        );
        let source = "my.1 = {\n\toption = {\n\t\tgrant_reward|_effect = { AMOUNT = 5 }\n";
        let value = hover_with(&symbols, EVENTS, source).unwrap();
        assert!(value.starts_with("**Scripted effect:** grant_reward_effect"));
        assert!(value.contains("- Parameters: $AMOUNT$"));
    }

    #[test]
    fn cascade_is_total() {
        assert!(hover_at(EVENTS, "my.1 = {\n\tnot_a_re|al_key = yes\n}\n").is_none());
        assert!(hover_at(EVENTS, "my.1 = {\n\t|\n}\n").is_none());
    }
}
