use super::FieldSchema;
use super::FieldType::{self, Block, Boolean, Effect, Enum, Integer, List, Trigger};

pub static EVENT_FILE_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new(
        "namespace",
        FieldType::String,
        "Namespace for the event ids declared in this file.",
    )
    .required()
    .example("namespace = my_mod"),
    FieldSchema::new(
        "<event_id>",
        Block,
        "Event definition, keyed by `namespace.number`.",
    )
    .wildcard()
    .example("my_mod.0001 = {\n\ttype = character_event\n\ttitle = my_mod.0001.t\n}"),
];

pub static EVENT_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("type", Enum, "How the event is presented.")
        .values(&[
            "character_event",
            "letter_event",
            "court_event",
            "duel_event",
            "activity_event",
            "empty",
        ])
        .default("character_event"),
    FieldSchema::new("title", FieldType::String, "Localization key or dynamic title block.")
        .example("title = my_mod.0001.t"),
    FieldSchema::new("desc", FieldType::String, "Localization key or dynamic description block.")
        .example("desc = my_mod.0001.desc"),
    FieldSchema::new("theme", FieldType::String, "Background, icon and sound theme.")
        .example("theme = intrigue"),
    FieldSchema::new("hidden", Boolean, "Hidden events run their effects without a window.")
        .default("no"),
    FieldSchema::new("orphan", Boolean, "Suppress the unused-event warning.").default("no"),
    FieldSchema::new("trigger", Trigger, "Conditions evaluated before the event fires."),
    FieldSchema::new("immediate", Effect, "Effects executed as soon as the event fires."),
    FieldSchema::new("after", Effect, "Effects executed after any option is picked."),
    FieldSchema::new("option", Block, "A choice shown to the player.")
        .example("option = {\n\tname = my_mod.0001.a\n\tadd_gold = 50\n}"),
    FieldSchema::new("left_portrait", Block, "Portrait shown on the left."),
    FieldSchema::new("right_portrait", Block, "Portrait shown on the right."),
    FieldSchema::new("lower_left_portrait", Block, "Small portrait, lower left."),
    FieldSchema::new("lower_center_portrait", Block, "Small portrait, lower center."),
    FieldSchema::new("lower_right_portrait", Block, "Small portrait, lower right."),
    FieldSchema::new("artifact", Block, "Artifact displayed in the event window."),
    FieldSchema::new("override_background", Block, "Overrides the theme background."),
    FieldSchema::new("cooldown", Block, "Minimum time before the event may fire again.")
        .example("cooldown = { years = 5 }"),
    FieldSchema::new(
        "weight_multiplier",
        Block,
        "Multiplier applied when the event is picked from a random pool.",
    ),
    FieldSchema::new("window", FieldType::String, "Custom GUI window for the event."),
    FieldSchema::new("widget", Block, "Custom widget shown in the event window."),
];

pub static EVENT_OPTION_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("name", FieldType::String, "Localization key for the option text.")
        .example("name = my_mod.0001.a"),
    FieldSchema::new("trigger", Trigger, "The option is only shown when this holds."),
    FieldSchema::new(
        "show_as_unavailable",
        Trigger,
        "Show the option greyed out instead of hiding it.",
    ),
    FieldSchema::new("ai_chance", Block, "Weight the AI gives to this option.")
        .example("ai_chance = { base = 10 }"),
    FieldSchema::new("fallback", Boolean, "Shown only if no other option is valid."),
    FieldSchema::new("exclusive", Boolean, "Hide every other option when this one is valid."),
    FieldSchema::new("trait", FieldType::String, "Trait icon shown next to the option."),
    FieldSchema::new("skill", Enum, "Skill icon shown next to the option.")
        .values(&[
            "diplomacy",
            "martial",
            "stewardship",
            "intrigue",
            "learning",
            "prowess",
        ]),
    FieldSchema::new("add_internal_flag", Enum, "Mark the option as special or dangerous.")
        .values(&["special", "dangerous"]),
    FieldSchema::new("highlight_portrait", FieldType::String, "Portrait highlighted on hover."),
    FieldSchema::new("flavor", FieldType::String, "Localization key for flavor text."),
];

pub static PORTRAIT_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("character", FieldType::String, "Scope of the character to show.")
        .required()
        .example("character = scope:target"),
    FieldSchema::new("animation", Enum, "Portrait animation.")
        .values(&[
            "idle",
            "happiness",
            "sadness",
            "anger",
            "fear",
            "worry",
            "shock",
            "disgust",
            "personality_bold",
            "personality_honorable",
            "personality_rational",
            "personality_callous",
            "scheme",
            "pain",
        ])
        .default("idle"),
    FieldSchema::new("outfit_tags", List, "Outfit tags applied to the portrait."),
    FieldSchema::new("remove_default_outfit", Boolean, "Strip the default outfit."),
    FieldSchema::new("hide_info", Boolean, "Hide the character's info panel."),
    FieldSchema::new("trigger", Trigger, "Only show the portrait when this holds."),
    FieldSchema::new("camera", FieldType::String, "Camera preset for the portrait."),
];

pub static COOLDOWN_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("years", Integer, "Cooldown in years.").min(0.0),
    FieldSchema::new("months", Integer, "Cooldown in months.").min(0.0),
    FieldSchema::new("days", Integer, "Cooldown in days.").min(0.0),
];

const PORTRAIT_BLOCKS: &[&str] = &[
    "left_portrait",
    "right_portrait",
    "lower_left_portrait",
    "lower_center_portrait",
    "lower_right_portrait",
];

pub fn schema_for_block_path(block_path: &[String]) -> Option<&'static [FieldSchema]> {
    match block_path {
        [] => None,
        [_event_id] => Some(EVENT_SCHEMA),
        [.., last] => Some(match last.as_str() {
            "option" => EVENT_OPTION_SCHEMA,
            "cooldown" => COOLDOWN_SCHEMA,
            block if PORTRAIT_BLOCKS.contains(&block) => PORTRAIT_SCHEMA,
            _ => &[],
        }),
    }
}
