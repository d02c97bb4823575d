//! File path -> schema routing.
//!
//! The registry is an ordered decision list: entries are tried in declaration
//! order and, inside an entry, patterns are tried in order. The first pattern
//! contained in the normalized path wins. Specific subfolders must therefore
//! be declared before their parent folder; see `no_entry_is_shadowed`.

use crate::schema::culture::{
    CULTURE_COMMON_SCHEMA, CULTURE_SCHEMA, INNOVATION_SCHEMA, TRADITION_SCHEMA,
};
use crate::schema::events::{self, EVENT_FILE_SCHEMA};
use crate::schema::history::{self, CHARACTER_HISTORY_SCHEMA, TITLE_HISTORY_SCHEMA};
use crate::schema::misc::{
    self, BUILDING_SCHEMA, CHARACTER_INTERACTION_SCHEMA, DECISION_SCHEMA, ON_ACTION_SCHEMA,
    SCRIPTED_EFFECT_SCHEMA, SCRIPTED_TRIGGER_SCHEMA,
};
use crate::schema::modifiers::MODIFIER_SCHEMA;
use crate::schema::religion::{self, DOCTRINE_SCHEMA, RELIGION_SCHEMA};
use crate::schema::traits::{self, TRAIT_SCHEMA};
use crate::schema::{FieldSchema, SchemaMap};
use dashmap::DashMap;
use std::sync::Arc;

/// Refines an entry's schema for a block path. `None` defers to the base schema.
pub type ContextResolver = fn(&[String]) -> Option<&'static [FieldSchema]>;

#[derive(Debug)]
pub struct SchemaRegistryEntry {
    pub file_type: &'static str,
    pub patterns: &'static [&'static str],
    pub schema: &'static [FieldSchema],
    pub initial_scope: Option<&'static str>,
    pub context_resolver: Option<ContextResolver>,
}

impl SchemaRegistryEntry {
    const fn new(
        file_type: &'static str,
        patterns: &'static [&'static str],
        schema: &'static [FieldSchema],
    ) -> Self {
        Self {
            file_type,
            patterns,
            schema,
            initial_scope: None,
            context_resolver: None,
        }
    }

    const fn scope(self, scope: &'static str) -> Self {
        Self {
            initial_scope: Some(scope),
            ..self
        }
    }

    const fn resolver(self, resolver: ContextResolver) -> Self {
        Self {
            context_resolver: Some(resolver),
            ..self
        }
    }

    fn matches(&self, normalized_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| normalized_path.contains(pattern))
    }
}

pub static REGISTRY: &[SchemaRegistryEntry] = &[
    SchemaRegistryEntry::new("trait", &["/common/traits/"], TRAIT_SCHEMA)
        .scope("character")
        .resolver(traits::schema_for_block_path),
    SchemaRegistryEntry::new("culture", &["/common/culture/cultures/"], CULTURE_SCHEMA)
        .scope("culture"),
    SchemaRegistryEntry::new(
        "culture_tradition",
        &["/common/culture/traditions/"],
        TRADITION_SCHEMA,
    )
    .scope("culture"),
    SchemaRegistryEntry::new(
        "culture_innovation",
        &["/common/culture/innovations/"],
        INNOVATION_SCHEMA,
    )
    .scope("culture"),
    SchemaRegistryEntry::new("culture_common", &["/common/culture/"], CULTURE_COMMON_SCHEMA)
        .scope("culture"),
    SchemaRegistryEntry::new("religion", &["/common/religion/religions/"], RELIGION_SCHEMA)
        .scope("faith")
        .resolver(religion::schema_for_block_path),
    SchemaRegistryEntry::new("doctrine", &["/common/religion/doctrines/"], DOCTRINE_SCHEMA)
        .scope("faith"),
    SchemaRegistryEntry::new("decision", &["/common/decisions/"], DECISION_SCHEMA)
        .scope("character"),
    SchemaRegistryEntry::new(
        "character_interaction",
        &["/common/character_interactions/"],
        CHARACTER_INTERACTION_SCHEMA,
    )
    .scope("character"),
    SchemaRegistryEntry::new(
        "scripted_effect",
        &["/common/scripted_effects/"],
        SCRIPTED_EFFECT_SCHEMA,
    )
    .resolver(misc::scripted_body_schema),
    SchemaRegistryEntry::new(
        "scripted_trigger",
        &["/common/scripted_triggers/"],
        SCRIPTED_TRIGGER_SCHEMA,
    )
    .resolver(misc::scripted_body_schema),
    SchemaRegistryEntry::new("on_action", &["/common/on_action/"], ON_ACTION_SCHEMA),
    SchemaRegistryEntry::new("building", &["/common/buildings/"], BUILDING_SCHEMA)
        .scope("province"),
    SchemaRegistryEntry::new("modifier", &["/common/modifiers/"], MODIFIER_SCHEMA),
    SchemaRegistryEntry::new(
        "character_history",
        &["/history/characters/"],
        CHARACTER_HISTORY_SCHEMA,
    )
    .scope("character")
    .resolver(history::character_schema_for_block_path),
    SchemaRegistryEntry::new("title_history", &["/history/titles/"], TITLE_HISTORY_SCHEMA)
        .scope("landed_title")
        .resolver(history::title_schema_for_block_path),
    SchemaRegistryEntry::new("event", &["/events/"], EVENT_FILE_SCHEMA)
        .scope("character")
        .resolver(events::schema_for_block_path),
];

/// A registry hit: the entry plus the memoized map of its base schema.
#[derive(Debug, Clone)]
pub struct SchemaLookupResult {
    pub entry: &'static SchemaRegistryEntry,
    pub schema_map: Arc<SchemaMap>,
}

/// Identity of a `'static` schema slice.
type SchemaKey = (usize, usize);

fn schema_key(schema: &'static [FieldSchema]) -> SchemaKey {
    (schema.as_ptr() as usize, schema.len())
}

pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Owned routing context handed to the providers. Both caches are filled on
/// first use and never invalidated: the catalog is compiled in, and editors
/// always supply the document's current path.
#[derive(Debug)]
pub struct SchemaRegistry {
    entries: &'static [SchemaRegistryEntry],
    path_cache: DashMap<String, Option<usize>>,
    map_cache: DashMap<SchemaKey, Arc<SchemaMap>>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::with_entries(REGISTRY)
    }
}

impl SchemaRegistry {
    pub fn with_entries(entries: &'static [SchemaRegistryEntry]) -> Self {
        Self {
            entries,
            path_cache: DashMap::new(),
            map_cache: DashMap::new(),
        }
    }

    fn entry_index(&self, path: &str) -> Option<usize> {
        let normalized = normalize_path(path);
        if let Some(cached) = self.path_cache.get(&normalized) {
            return *cached;
        }

        let index = self
            .entries
            .iter()
            .position(|entry| entry.matches(&normalized));
        tracing::debug!(
            path = %normalized,
            file_type = index.map(|i| self.entries[i].file_type),
            "resolved schema entry"
        );
        self.path_cache.insert(normalized, index);
        index
    }

    pub fn entry_for_file(&self, path: &str) -> Option<&'static SchemaRegistryEntry> {
        let entries = self.entries;
        self.entry_index(path).map(|index| &entries[index])
    }

    pub fn for_file(&self, path: &str) -> Option<SchemaLookupResult> {
        let entry = self.entry_for_file(path)?;
        Some(SchemaLookupResult {
            entry,
            schema_map: self.schema_map(entry.schema),
        })
    }

    /// Schema for a position inside `path`, refined by the enclosing blocks.
    pub fn schema_for_context(
        &self,
        path: &str,
        block_path: &[String],
    ) -> &'static [FieldSchema] {
        let Some(entry) = self.entry_for_file(path) else {
            return &[];
        };
        if block_path.is_empty() {
            return entry.schema;
        }
        entry
            .context_resolver
            .and_then(|resolve| resolve(block_path))
            .unwrap_or(entry.schema)
    }

    pub fn schema_map_for_file(&self, path: &str) -> Option<Arc<SchemaMap>> {
        self.for_file(path).map(|result| result.schema_map)
    }

    pub fn schema_map_for_context(
        &self,
        path: &str,
        block_path: &[String],
    ) -> Option<Arc<SchemaMap>> {
        self.entry_for_file(path)?;
        Some(self.schema_map(self.schema_for_context(path, block_path)))
    }

    /// One map per distinct schema slice, shared by every file and context
    /// that resolves to it.
    pub fn schema_map(&self, schema: &'static [FieldSchema]) -> Arc<SchemaMap> {
        self.map_cache
            .entry(schema_key(schema))
            .or_insert_with(|| Arc::new(SchemaMap::new(schema)))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::culture::CULTURE_SCHEMA;
    use crate::schema::events::{EVENT_OPTION_SCHEMA, EVENT_SCHEMA};

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn specific_culture_folder_wins_over_parent() {
        let registry = SchemaRegistry::default();
        let hit = registry
            .for_file("/mod/common/culture/cultures/00_north_germanic.txt")
            .unwrap();
        assert_eq!(hit.entry.file_type, "culture");

        let generic = registry
            .for_file("/mod/common/culture/pillars/00_ethos.txt")
            .unwrap();
        assert_eq!(generic.entry.file_type, "culture_common");
    }

    #[test]
    fn normalizes_windows_separators() {
        let registry = SchemaRegistry::default();
        let hit = registry
            .for_file(r"C:\Games\CK3\game\common\traits\00_traits.txt")
            .unwrap();
        assert_eq!(hit.entry.file_type, "trait");
        assert_eq!(hit.entry.initial_scope, Some("character"));
    }

    #[test]
    fn repeated_lookups_share_cached_map() {
        let registry = SchemaRegistry::default();
        let first = registry.for_file("/mod/events/my_events.txt").unwrap();
        let second = registry.for_file("/mod/events/my_events.txt").unwrap();
        assert!(std::ptr::eq(first.entry, second.entry));
        assert!(Arc::ptr_eq(&first.schema_map, &second.schema_map));
    }

    #[test]
    fn unknown_files_resolve_to_nothing() {
        let registry = SchemaRegistry::default();
        assert!(registry.for_file("/mod/gfx/portraits/x.txt").is_none());
        assert!(registry.schema_map_for_file("/mod/readme.md").is_none());
        assert!(registry
            .schema_for_context("/mod/readme.md", &path(&["a"]))
            .is_empty());
    }

    #[test]
    fn context_resolver_refines_schema() {
        let registry = SchemaRegistry::default();
        let file = "/mod/events/my_events.txt";
        assert_eq!(registry.schema_for_context(file, &[]), EVENT_FILE_SCHEMA);
        assert_eq!(
            registry.schema_for_context(file, &path(&["my.1"])),
            EVENT_SCHEMA
        );
        assert_eq!(
            registry.schema_for_context(file, &path(&["my.1", "option"])),
            EVENT_OPTION_SCHEMA
        );
    }

    #[test]
    fn entries_without_resolver_keep_base_schema() {
        let registry = SchemaRegistry::default();
        let file = "/mod/common/culture/cultures/x.txt";
        assert_eq!(
            registry.schema_for_context(file, &path(&["norse", "ethnicities"])),
            CULTURE_SCHEMA
        );
    }

    #[test]
    fn context_maps_are_memoized_by_schema() {
        let registry = SchemaRegistry::default();
        let a = registry
            .schema_map_for_context("/a/events/one.txt", &path(&["x.1", "option"]))
            .unwrap();
        let b = registry
            .schema_map_for_context("/b/events/two.txt", &path(&["y.2", "option"]))
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.get_exact("name").is_some());
    }

    #[test]
    fn shared_tables_map_once_across_entries() {
        let registry = SchemaRegistry::default();
        let modifiers = registry
            .schema_map_for_file("/mod/common/modifiers/00_modifiers.txt")
            .unwrap();
        let trait_modifiers = registry
            .schema_map_for_context(
                "/mod/common/traits/00_traits.txt",
                &path(&["brave", "culture_modifier"]),
            )
            .unwrap();
        assert!(Arc::ptr_eq(&modifiers, &trait_modifiers));
        assert!(Arc::ptr_eq(&modifiers, &registry.schema_map(MODIFIER_SCHEMA)));
    }

    #[test]
    fn no_entry_is_shadowed() {
        for (later_index, later) in REGISTRY.iter().enumerate() {
            for earlier in &REGISTRY[..later_index] {
                for pattern in later.patterns {
                    for earlier_pattern in earlier.patterns {
                        assert!(
                            !pattern.contains(earlier_pattern),
                            "{} is unreachable behind {}",
                            later.file_type,
                            earlier.file_type
                        );
                    }
                }
            }
        }
    }
}
