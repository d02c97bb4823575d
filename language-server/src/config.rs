//! Client-supplied server settings.
//!
//! Read from `initializationOptions` and `workspace/didChangeConfiguration`.
//! Either payload may carry the settings at its root or under a `ck3` key.

use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;

/// Key of the settings section in client configuration.
pub const SECTION: &str = "ck3";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Publish brace and `=` lint results.
    pub syntax_diagnostics: bool,
    /// Publish unknown-field and enum-value warnings.
    pub schema_diagnostics: bool,
    /// Index scripted effects, triggers and events across the workspace.
    pub scan_workspace: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            syntax_diagnostics: true,
            schema_diagnostics: false,
            scan_workspace: true,
        }
    }
}

impl Settings {
    /// Missing or `null` payloads give the defaults.
    pub fn from_value(value: Option<Value>) -> Result<Self> {
        let value = match value {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Object(mut map)) if map.contains_key(SECTION) => {
                map.remove(SECTION).unwrap_or_default()
            }
            Some(value) => value,
        };
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_payload_uses_defaults() {
        assert_eq!(Settings::from_value(None).unwrap(), Settings::default());
        assert_eq!(
            Settings::from_value(Some(Value::Null)).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn reads_section_or_root() {
        let nested = Settings::from_value(Some(json!({ "ck3": { "schemaDiagnostics": true } })))
            .unwrap();
        assert!(nested.schema_diagnostics);
        assert!(nested.syntax_diagnostics);

        let root = Settings::from_value(Some(json!({ "scanWorkspace": false }))).unwrap();
        assert!(!root.scan_workspace);
    }

    #[test]
    fn rejects_mistyped_settings() {
        let err = Settings::from_value(Some(json!({ "syntaxDiagnostics": "sometimes" })));
        assert!(err.is_err());
    }
}
