use super::FieldSchema;
use super::FieldType::{self, Block, Enum, Integer, List, Trigger};

pub static CULTURE_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("color", FieldType::String, "Map color, as `{ r g b }` or `hsv { h s v }`.")
        .example("color = { 0.5 0.2 0.1 }"),
    FieldSchema::new("created", FieldType::String, "Date the culture was founded.")
        .example("created = 900.1.1"),
    FieldSchema::new("parents", List, "Cultures this one hybridized or diverged from."),
    FieldSchema::new("ethos", FieldType::String, "Ethos pillar.")
        .required()
        .example("ethos = ethos_bellicose"),
    FieldSchema::new("heritage", FieldType::String, "Heritage pillar.")
        .required()
        .example("heritage = heritage_north_germanic"),
    FieldSchema::new("language", FieldType::String, "Language pillar.")
        .required()
        .example("language = language_norse"),
    FieldSchema::new("martial_custom", Enum, "Who may become knights and commanders.")
        .values(&[
            "martial_custom_male_only",
            "martial_custom_equal",
            "martial_custom_female_only",
        ])
        .required(),
    FieldSchema::new("traditions", List, "Starting traditions.")
        .example("traditions = { tradition_raiding tradition_seafaring }"),
    FieldSchema::new("name_list", FieldType::String, "Name list used for characters. May repeat."),
    FieldSchema::new("coa_gfx", List, "Coat of arms graphical cultures."),
    FieldSchema::new("building_gfx", List, "Building graphical cultures."),
    FieldSchema::new("clothing_gfx", List, "Clothing graphical cultures."),
    FieldSchema::new("unit_gfx", List, "Unit graphical cultures."),
    FieldSchema::new("ethnicities", Block, "Weighted ethnicities for portraits.")
        .example("ethnicities = { 10 = caucasian_northern_blond }"),
    FieldSchema::new("dlc_tradition", Block, "Tradition granted only with a DLC feature."),
    FieldSchema::new("history_loc_override", FieldType::String, "Override for the culture history text."),
];

pub static TRADITION_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("category", Enum, "Tradition category.")
        .values(&["realm", "combat", "societal", "regional", "ritual"])
        .required(),
    FieldSchema::new("layers", Block, "Icon layers for the tradition."),
    FieldSchema::new("is_shown", Trigger, "Whether the tradition is listed at all."),
    FieldSchema::new("can_pick", Trigger, "Whether a culture may adopt the tradition."),
    FieldSchema::new("parameters", Block, "Culture parameters granted by the tradition.")
        .example("parameters = { hall_of_heroes = yes }"),
    FieldSchema::new("character_modifier", Block, "Modifiers for characters of the culture."),
    FieldSchema::new("culture_modifier", Block, "Modifiers applied to the culture."),
    FieldSchema::new("county_modifier", Block, "Modifiers for counties of the culture."),
    FieldSchema::new("province_modifier", Block, "Modifiers for provinces of the culture."),
    FieldSchema::new(
        "doctrine_character_modifier",
        Block,
        "Modifiers gated on a doctrine of the character's faith.",
    ),
    FieldSchema::new("cost", Block, "Prestige cost to adopt the tradition."),
    FieldSchema::new("ai_will_do", Block, "AI weight for adopting the tradition."),
];

pub static INNOVATION_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("group", FieldType::String, "Innovation group.").required(),
    FieldSchema::new("culture_era", Enum, "Era the innovation belongs to.")
        .values(&[
            "culture_era_tribal",
            "culture_era_early_medieval",
            "culture_era_high_medieval",
            "culture_era_late_medieval",
        ])
        .required(),
    FieldSchema::new("icon", FieldType::String, "Icon texture."),
    FieldSchema::new("region", FieldType::String, "Geographic region of a regional innovation."),
    FieldSchema::new("potential", Trigger, "Whether a culture may see the innovation."),
    FieldSchema::new("can_progress", Trigger, "Whether the culture may research it."),
    FieldSchema::new("character_modifier", Block, "Modifiers for characters of the culture."),
    FieldSchema::new("culture_modifier", Block, "Modifiers applied to the culture."),
    FieldSchema::new("county_modifier", Block, "Modifiers for counties of the culture."),
    FieldSchema::new("custom", FieldType::String, "Custom localized effect description."),
    FieldSchema::new("unlock_building", FieldType::String, "Building unlocked by the innovation."),
    FieldSchema::new("unlock_maa", FieldType::String, "Men-at-arms type unlocked by the innovation."),
    FieldSchema::new("unlock_decision", FieldType::String, "Decision unlocked by the innovation."),
    FieldSchema::new("unlock_casus_belli", FieldType::String, "Casus belli unlocked by the innovation."),
    FieldSchema::new("unlock_law", FieldType::String, "Law unlocked by the innovation."),
];

/// Pillars, eras and the other `common/culture` subfolders.
pub static CULTURE_COMMON_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("type", Enum, "Pillar kind.").values(&["ethos", "heritage", "language"]),
    FieldSchema::new("color", FieldType::String, "Map or UI color."),
    FieldSchema::new("is_shown", Trigger, "Whether the entry is listed at all."),
    FieldSchema::new("can_pick", Trigger, "Whether a culture may pick the entry."),
    FieldSchema::new("parameters", Block, "Culture parameters granted by the entry."),
    FieldSchema::new("character_modifier", Block, "Modifiers for characters of the culture."),
    FieldSchema::new("culture_modifier", Block, "Modifiers applied to the culture."),
    FieldSchema::new("year", Integer, "Earliest year, for culture eras."),
    FieldSchema::new("invalid_for_government", FieldType::String, "Government this era does not apply to."),
    FieldSchema::new("ai_will_do", Block, "AI weight for picking the entry."),
];
