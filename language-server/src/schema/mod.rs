//! Declarative field catalog for CK3 script files.
//!
//! Every table in this module tree is a `'static` slice of [`FieldSchema`]
//! records built at compile time. Nothing here is mutated at runtime; the
//! [`crate::registry::SchemaRegistry`] decides which slice applies to a file
//! and hands out memoized [`SchemaMap`]s for keyed lookup.

pub mod culture;
pub mod events;
pub mod history;
pub mod misc;
pub mod modifiers;
pub mod religion;
pub mod traits;

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Boolean,
    Integer,
    Float,
    String,
    Enum,
    Block,
    Trigger,
    Effect,
    Modifier,
    List,
}

impl FieldType {
    pub fn label(self) -> &'static str {
        match self {
            FieldType::Boolean => "boolean",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::String => "string",
            FieldType::Enum => "enum",
            FieldType::Block => "block",
            FieldType::Trigger => "trigger",
            FieldType::Effect => "effect",
            FieldType::Modifier => "modifier",
            FieldType::List => "list",
        }
    }
}

/// One documented key of a script file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub field_type: FieldType,
    pub description: &'static str,
    pub values: &'static [&'static str],
    pub default: Option<&'static str>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub required: bool,
    pub example: Option<&'static str>,
    /// Matches any key in its context (entity ids, dates).
    pub is_wildcard: bool,
}

impl FieldSchema {
    pub const fn new(
        name: &'static str,
        field_type: FieldType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            field_type,
            description,
            values: &[],
            default: None,
            min: None,
            max: None,
            required: false,
            example: None,
            is_wildcard: false,
        }
    }

    pub const fn values(self, values: &'static [&'static str]) -> Self {
        Self { values, ..self }
    }

    pub const fn default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn example(self, example: &'static str) -> Self {
        Self {
            example: Some(example),
            ..self
        }
    }

    pub const fn wildcard(self) -> Self {
        Self {
            is_wildcard: true,
            ..self
        }
    }
}

/// Name-keyed view over one schema slice.
#[derive(Debug, Default)]
pub struct SchemaMap {
    fields: HashMap<&'static str, &'static FieldSchema>,
    wildcard: Option<&'static FieldSchema>,
}

impl SchemaMap {
    pub fn new(schema: &'static [FieldSchema]) -> Self {
        let mut fields = HashMap::with_capacity(schema.len());
        let mut wildcard = None;
        for field in schema {
            if field.is_wildcard {
                wildcard.get_or_insert(field);
                continue;
            }
            // First declaration wins, same as the linear lookup it replaces.
            fields.entry(field.name).or_insert(field);
        }
        Self { fields, wildcard }
    }

    /// Exact key match, falling back to the schema's wildcard field.
    pub fn get(&self, key: &str) -> Option<&'static FieldSchema> {
        self.get_exact(key).or(self.wildcard)
    }

    pub fn get_exact(&self, key: &str) -> Option<&'static FieldSchema> {
        self.fields.get(key).copied()
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.wildcard.is_none()
    }
}

/// `1066.9.15` style history keys.
pub fn is_date_key(key: &str) -> bool {
    let mut parts = 0;
    for part in key.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        parts += 1;
    }
    parts == 3
}

pub const BOOLEAN_VALUES: &[&str] = &["yes", "no"];

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[FieldSchema] = &[
        FieldSchema::new("namespace", FieldType::String, "Event namespace").required(),
        FieldSchema::new("<event_id>", FieldType::Block, "Event definition").wildcard(),
        FieldSchema::new("namespace", FieldType::Integer, "Shadowed duplicate"),
    ];

    #[test]
    fn exact_match_beats_wildcard() {
        let map = SchemaMap::new(SAMPLE);
        let field = map.get("namespace").unwrap();
        assert_eq!(field.field_type, FieldType::String);
        assert!(field.required);
    }

    #[test]
    fn unknown_keys_resolve_to_wildcard() {
        let map = SchemaMap::new(SAMPLE);
        assert_eq!(map.get("my_mod.0001").unwrap().name, "<event_id>");
        assert!(map.get_exact("my_mod.0001").is_none());
        assert!(map.has_wildcard());
    }

    #[test]
    fn recognizes_history_dates() {
        assert!(is_date_key("1066.9.15"));
        assert!(!is_date_key("1066.9"));
        assert!(!is_date_key("birth"));
        assert!(!is_date_key("1066..15"));
    }
}
