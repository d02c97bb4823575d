use super::FieldSchema;
use super::FieldType::{self, Block, Boolean, Enum, Integer, List, Trigger};

pub static RELIGION_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("family", Enum, "Religious family.")
        .values(&["rf_abrahamic", "rf_eastern", "rf_pagan"])
        .required(),
    FieldSchema::new("doctrine", FieldType::String, "Default doctrine for every faith. May repeat.")
        .example("doctrine = doctrine_monogamy"),
    FieldSchema::new("pagan_roots", Boolean, "Whether the religion counts as pagan.")
        .default("no"),
    FieldSchema::new("graphical_faith", FieldType::String, "Graphical culture used for faith art."),
    FieldSchema::new("piety_icon_group", FieldType::String, "Icon set for piety levels."),
    FieldSchema::new("doctrine_background_icon", FieldType::String, "Background icon for doctrines."),
    FieldSchema::new("traits", Block, "Virtue and sin traits."),
    FieldSchema::new("custom_faith_icons", List, "Icons available for custom faiths."),
    FieldSchema::new("holy_order_names", List, "Name options for holy orders."),
    FieldSchema::new("holy_order_maa", List, "Men-at-arms types available to holy orders."),
    FieldSchema::new("localization", Block, "Religion-specific localization keys."),
    FieldSchema::new("faiths", Block, "Faiths of the religion, keyed by faith id."),
];

pub static FAITH_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("color", FieldType::String, "Map color.").required(),
    FieldSchema::new("icon", FieldType::String, "Faith icon."),
    FieldSchema::new("reformed_icon", FieldType::String, "Icon used once the faith is reformed."),
    FieldSchema::new("doctrine", FieldType::String, "Doctrine adopted by the faith. May repeat."),
    FieldSchema::new("holy_site", FieldType::String, "Holy site. May repeat."),
    FieldSchema::new("religious_head", FieldType::String, "Title of the faith's head."),
    FieldSchema::new("reformed", Boolean, "Whether the faith starts reformed."),
    FieldSchema::new("localization", Block, "Faith-specific localization keys."),
];

pub static VIRTUE_SIN_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("virtues", List, "Traits considered virtuous."),
    FieldSchema::new("sins", List, "Traits considered sinful."),
];

pub static DOCTRINE_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("group", FieldType::String, "Doctrine group.").required(),
    FieldSchema::new("number_of_picks", Integer, "How many doctrines of the group a faith holds.")
        .min(1.0)
        .default("1"),
    FieldSchema::new("is_available_on_create", Trigger, "Whether it can be picked on creation."),
    FieldSchema::new("can_pick", Trigger, "Whether a faith may pick the doctrine."),
    FieldSchema::new("visible", Boolean, "Whether the doctrine is shown in the UI."),
    FieldSchema::new("piety_cost", Block, "Piety cost to adopt the doctrine."),
    FieldSchema::new("parameters", Block, "Faith parameters granted by the doctrine."),
    FieldSchema::new("character_modifier", Block, "Modifiers for followers."),
    FieldSchema::new("clergy_modifier", Block, "Modifiers for clergy."),
    FieldSchema::new("traits", Block, "Virtue and sin traits added by the doctrine."),
];

pub fn schema_for_block_path(block_path: &[String]) -> Option<&'static [FieldSchema]> {
    match block_path {
        [] => None,
        [_religion] => Some(RELIGION_SCHEMA),
        [_religion, faiths] if faiths == "faiths" => Some(&[]),
        [_religion, faiths, _faith] if faiths == "faiths" => Some(FAITH_SCHEMA),
        [.., last] if last == "traits" => Some(VIRTUE_SIN_SCHEMA),
        _ => Some(&[]),
    }
}
