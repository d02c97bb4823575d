//! `common/traits` schemas and the modifier-context fold.

use super::modifiers::MODIFIER_SCHEMA;
use super::FieldSchema;
use super::FieldType::{self, Block, Boolean, Enum, Float, Integer, List, Trigger};

pub const TRAIT_CATEGORY_VALUES: &[&str] = &[
    "personality",
    "education",
    "childhood",
    "commander",
    "winter_commander",
    "lifestyle",
    "court_type",
    "fame",
    "health",
];

pub static TRAIT_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("category", Enum, "Which trait group this trait belongs to.")
        .values(TRAIT_CATEGORY_VALUES)
        .required()
        .example("category = personality"),
    FieldSchema::new(
        "group",
        FieldType::String,
        "Trait group sharing opposites and inheritance, e.g. leveled education traits.",
    )
    .example("group = education_diplomacy"),
    FieldSchema::new("level", Integer, "Level inside the trait group.")
        .range(1.0, 5.0)
        .example("level = 2"),
    FieldSchema::new("opposites", List, "Traits that cannot be held together with this one.")
        .example("opposites = { craven }"),
    FieldSchema::new("genetic", Boolean, "Whether the trait can be inherited genetically.")
        .default("no"),
    FieldSchema::new("physical", Boolean, "Whether the trait is a physical trait.")
        .default("no"),
    FieldSchema::new("good", Boolean, "Whether the trait is considered positive.")
        .default("no"),
    FieldSchema::new("inherit_chance", Integer, "Percent chance to pass the trait on.")
        .range(0.0, 100.0)
        .example("inherit_chance = 25"),
    FieldSchema::new("birth", Float, "Chance for a newborn to receive the trait.")
        .range(0.0, 1.0)
        .example("birth = 0.01"),
    FieldSchema::new(
        "random_creation",
        Float,
        "Chance for a randomly generated character to receive the trait.",
    )
    .range(0.0, 1.0),
    FieldSchema::new(
        "shown_in_ruler_designer",
        Boolean,
        "Whether the trait can be picked in the ruler designer.",
    )
    .default("yes"),
    FieldSchema::new("ruler_designer_cost", Integer, "Point cost in the ruler designer.")
        .example("ruler_designer_cost = 20"),
    FieldSchema::new("minimum_age", Integer, "Youngest age at which the trait may be held.")
        .min(0.0),
    FieldSchema::new("maximum_age", Integer, "Oldest age at which the trait may be held.")
        .min(0.0),
    FieldSchema::new("valid_sex", Enum, "Restricts the trait to one sex.")
        .values(&["all", "male", "female"])
        .default("all"),
    FieldSchema::new("potential", Trigger, "Who can have the trait at all."),
    FieldSchema::new(
        "culture_modifier",
        Block,
        "Modifiers applied when the holder's culture has a parameter.",
    )
    .example("culture_modifier = { parameter = martial_custom_male_only prowess = 2 }"),
    FieldSchema::new(
        "faith_modifier",
        Block,
        "Modifiers applied when the holder's faith has a parameter.",
    ),
    FieldSchema::new(
        "triggered_opinion",
        Block,
        "Opinion modifier applied towards holders matching a parameter.",
    ),
    FieldSchema::new("compatibility", Block, "Compatibility with other traits, by trait id.")
        .example("compatibility = { honest = 20 deceitful = -20 }"),
    FieldSchema::new("track", Block, "Experience track with XP-threshold modifier blocks."),
    FieldSchema::new("tracks", Block, "Named experience tracks, each with XP thresholds."),
    FieldSchema::new("icon", FieldType::String, "Override icon texture for the trait."),
    FieldSchema::new("name", FieldType::String, "Localization key or dynamic name block."),
    FieldSchema::new("desc", FieldType::String, "Localization key or dynamic description block."),
    FieldSchema::new("flag", FieldType::String, "Script flag checked with `has_trait_flag`.")
        .example("flag = can_not_marry"),
    FieldSchema::new(
        "enables_inbred",
        Boolean,
        "Whether the trait counts towards the inbred check.",
    ),
];

pub static TRIGGERED_OPINION_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("opinion_modifier", FieldType::String, "Opinion modifier to apply.").required(),
    FieldSchema::new("parameter", FieldType::String, "Culture or faith parameter that activates it."),
    FieldSchema::new("check_missing", Boolean, "Apply when the parameter is absent instead."),
    FieldSchema::new("same_faith", Boolean, "Only towards characters of the same faith."),
    FieldSchema::new("same_culture", Boolean, "Only towards characters of the same culture."),
    FieldSchema::new("ignore_opinion_value_if_same_trait", Boolean, "Skip when both hold the trait."),
];

pub static TRACK_SCHEMA: &[FieldSchema] = &[FieldSchema::new(
    "<xp>",
    Block,
    "Modifiers granted once the track reaches this amount of experience (0-100).",
)
.wildcard()];

/// Blocks whose body is a modifier list.
const MODIFIER_BLOCKS: &[&str] = &["culture_modifier", "faith_modifier"];

/// Blocks whose body is a condition, never a modifier list.
const CONDITION_BLOCKS: &[&str] = &["potential", "trigger", "is_valid", "limit"];

fn is_xp_threshold(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Walks the block path outermost to innermost: XP thresholds and modifier
/// blocks switch modifier context on, condition blocks switch it off.
pub fn in_modifier_context(block_path: &[String]) -> bool {
    block_path.iter().fold(false, |inside, segment| {
        let segment = segment.as_str();
        if is_xp_threshold(segment) || MODIFIER_BLOCKS.contains(&segment) {
            true
        } else if CONDITION_BLOCKS.contains(&segment) {
            false
        } else {
            inside
        }
    })
}

pub fn schema_for_block_path(block_path: &[String]) -> Option<&'static [FieldSchema]> {
    if in_modifier_context(block_path) {
        return Some(MODIFIER_SCHEMA);
    }

    match block_path {
        [] => None,
        [_trait_id] => Some(TRAIT_SCHEMA),
        [.., last] if last == "triggered_opinion" => Some(TRIGGERED_OPINION_SCHEMA),
        [.., last] if last == "track" => Some(TRACK_SCHEMA),
        [.., parent, _] if parent == "tracks" => Some(TRACK_SCHEMA),
        _ => Some(&[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn xp_threshold_enters_modifier_context() {
        assert!(in_modifier_context(&path(&["blademaster_3", "track", "50"])));
        assert!(!in_modifier_context(&path(&["blademaster_3", "track"])));
    }

    #[test]
    fn condition_block_leaves_modifier_context() {
        assert!(!in_modifier_context(&path(&["brave", "culture_modifier", "trigger"])));
        assert!(in_modifier_context(&path(&["brave", "culture_modifier"])));
    }

    #[test]
    fn resolves_nested_trait_blocks() {
        assert_eq!(schema_for_block_path(&path(&["brave"])), Some(TRAIT_SCHEMA));
        assert_eq!(
            schema_for_block_path(&path(&["hunter_1", "tracks", "hunter"])),
            Some(TRACK_SCHEMA)
        );
        assert_eq!(
            schema_for_block_path(&path(&["hunter_1", "tracks", "hunter", "100"])),
            Some(MODIFIER_SCHEMA)
        );
        assert_eq!(schema_for_block_path(&path(&["brave", "potential"])), Some(&[][..]));
        assert_eq!(schema_for_block_path(&[]), None);
    }
}
