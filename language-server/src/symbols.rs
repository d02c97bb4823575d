use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tower_lsp::lsp_types::{Range, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    ScriptedEffect,
    ScriptedTrigger,
    Event,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 3] = [
        SymbolKind::ScriptedEffect,
        SymbolKind::ScriptedTrigger,
        SymbolKind::Event,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SymbolKind::ScriptedEffect => "Scripted effect",
            SymbolKind::ScriptedTrigger => "Scripted trigger",
            SymbolKind::Event => "Event",
        }
    }

    /// Registry file types whose top-level blocks are definitions.
    pub fn from_file_type(file_type: &str) -> Option<Self> {
        match file_type {
            "scripted_effect" => Some(SymbolKind::ScriptedEffect),
            "scripted_trigger" => Some(SymbolKind::ScriptedTrigger),
            "event" => Some(SymbolKind::Event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolLocation {
    pub uri: Url,
    pub range: Range,
}

#[derive(Debug, Clone)]
pub struct SymbolReference {
    pub location: SymbolLocation,
}

#[derive(Debug, Clone)]
pub struct SymbolDefinition {
    pub location: SymbolLocation,
    pub metadata: SymbolMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMetadata {
    /// `$PARAM$` placeholders used in a scripted definition's body.
    pub parameters: Vec<String>,
    /// `type = ...` of an event.
    pub event_type: Option<String>,
    /// `title = ...` localization key of an event.
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SymbolOccurrence {
    pub kind: SymbolKind,
    pub id: String,
    pub range: Range,
}

#[derive(Debug, Default)]
pub struct SymbolIndex {
    definitions: DashMap<String, SymbolDefinition>,
    duplicates: DashMap<String, Vec<SymbolDefinition>>,
    references: DashMap<String, Vec<SymbolReference>>,
}

impl SymbolIndex {
    pub fn clear_document(&self, uri: &Url) {
        let mut removed_ids = Vec::new();
        self.definitions.retain(|id, def| {
            if def.location.uri == *uri {
                removed_ids.push(id.clone());
                false
            } else {
                true
            }
        });
        for mut entry in self.references.iter_mut() {
            entry
                .value_mut()
                .retain(|reference| reference.location.uri != *uri);
        }
        self.references.retain(|_, refs| !refs.is_empty());
        for mut entry in self.duplicates.iter_mut() {
            entry
                .value_mut()
                .retain(|definition| definition.location.uri != *uri);
        }
        self.duplicates.retain(|_, defs| !defs.is_empty());

        for id in removed_ids {
            let promoted = self.duplicates.get_mut(&id).and_then(|mut extra| {
                if extra.is_empty() {
                    return None;
                }
                let definition = extra.remove(0);
                Some((definition, extra.is_empty()))
            });
            if let Some((definition, exhausted)) = promoted {
                self.definitions.insert(id.clone(), definition);
                if exhausted {
                    self.duplicates.remove(&id);
                }
            }
        }
    }

    pub fn insert_definition(&self, id: String, def: SymbolDefinition) {
        match self.definitions.entry(id.clone()) {
            Entry::Occupied(_) => {
                self.duplicates.entry(id).or_default().push(def);
            }
            Entry::Vacant(entry) => {
                entry.insert(def);
                self.duplicates.remove(&id);
            }
        }
    }

    pub fn add_reference(&self, id: String, reference: SymbolReference) {
        self.references.entry(id).or_default().push(reference);
    }

    pub fn definition(
        &self,
        id: &str,
    ) -> Option<dashmap::mapref::one::Ref<'_, String, SymbolDefinition>> {
        self.definitions.get(id)
    }

    pub fn references(
        &self,
        id: &str,
    ) -> Option<dashmap::mapref::one::Ref<'_, String, Vec<SymbolReference>>> {
        self.references.get(id)
    }

    pub fn definitions_iter(&self) -> dashmap::iter::Iter<'_, String, SymbolDefinition> {
        self.definitions.iter()
    }

    pub fn duplicate_definitions_iter(
        &self,
    ) -> dashmap::iter::Iter<'_, String, Vec<SymbolDefinition>> {
        self.duplicates.iter()
    }
}

#[derive(Debug, Default)]
pub struct SymbolStore {
    pub scripted_effects: SymbolIndex,
    pub scripted_triggers: SymbolIndex,
    pub events: SymbolIndex,
}

impl SymbolStore {
    pub fn index(&self, kind: SymbolKind) -> &SymbolIndex {
        match kind {
            SymbolKind::ScriptedEffect => &self.scripted_effects,
            SymbolKind::ScriptedTrigger => &self.scripted_triggers,
            SymbolKind::Event => &self.events,
        }
    }

    pub fn clear_document(&self, uri: &Url) {
        for kind in SymbolKind::ALL {
            self.index(kind).clear_document(uri);
        }
    }

    /// First kind that defines `id`, scripted effects before triggers.
    pub fn find_definition(&self, id: &str) -> Option<(SymbolKind, SymbolDefinition)> {
        SymbolKind::ALL.into_iter().find_map(|kind| {
            self.index(kind)
                .definition(id)
                .map(|def| (kind, def.value().clone()))
        })
    }
}

pub(crate) fn sanitize_markdown(value: &str) -> String {
    value.trim().replace('|', "\\|").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_location(path: &str) -> SymbolLocation {
        use tower_lsp::lsp_types::Position;

        SymbolLocation {
            uri: Url::parse(&format!("file:///{}", path)).unwrap(),
            range: Range {
                start: Position::default(),
                end: Position::default(),
            },
        }
    }

    fn effect_definition(path: &str) -> SymbolDefinition {
        SymbolDefinition {
            location: test_location(path),
            metadata: SymbolMetadata {
                parameters: vec!["AMOUNT".into()],
                ..SymbolMetadata::default()
            },
        }
    }

    #[test]
    fn tracks_duplicates_and_promotes_after_clear() {
        let index = SymbolIndex::default();
        index.insert_definition(
            "give_gold_effect".into(),
            effect_definition("common/scripted_effects/a.txt"),
        );
        index.insert_definition(
            "give_gold_effect".into(),
            effect_definition("common/scripted_effects/b.txt"),
        );

        let duplicates: Vec<_> = index
            .duplicate_definitions_iter()
            .map(|entry| entry.key().clone())
            .collect();
        assert_eq!(duplicates, vec!["give_gold_effect".to_string()]);

        index.clear_document(&Url::parse("file:///common/scripted_effects/a.txt").unwrap());

        assert!(index.duplicate_definitions_iter().next().is_none());
        let current = index.definition("give_gold_effect").unwrap();
        assert_eq!(
            current.location.uri,
            Url::parse("file:///common/scripted_effects/b.txt").unwrap()
        );
    }

    #[test]
    fn clearing_drops_references_from_document() {
        let index = SymbolIndex::default();
        index.add_reference(
            "my_mod.0001".into(),
            SymbolReference {
                location: test_location("events/a.txt"),
            },
        );
        index.clear_document(&Url::parse("file:///events/a.txt").unwrap());
        assert!(index.references("my_mod.0001").is_none());
    }

    #[test]
    fn store_finds_definition_across_kinds() {
        let store = SymbolStore::default();
        store.scripted_triggers.insert_definition(
            "is_ruler_trigger".into(),
            effect_definition("common/scripted_triggers/t.txt"),
        );
        let (kind, _) = store.find_definition("is_ruler_trigger").unwrap();
        assert_eq!(kind, SymbolKind::ScriptedTrigger);
        assert!(store.find_definition("missing").is_none());
    }

    #[test]
    fn maps_file_types_to_kinds() {
        assert_eq!(SymbolKind::from_file_type("event"), Some(SymbolKind::Event));
        assert_eq!(SymbolKind::from_file_type("trait"), None);
    }
}
