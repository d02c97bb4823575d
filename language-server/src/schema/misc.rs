//! Decisions, interactions, scripted effects/triggers, on_actions and
//! buildings. Only the scripted definitions need block-path refinement.

use super::FieldSchema;
use super::FieldType::{self, Block, Boolean, Effect, Enum, Float, Integer, List, Trigger};

pub static DECISION_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("picture", FieldType::String, "Illustration shown in the decision window."),
    FieldSchema::new("desc", FieldType::String, "Localization key for the description."),
    FieldSchema::new("title", FieldType::String, "Localization key for the title."),
    FieldSchema::new("selection_tooltip", FieldType::String, "Tooltip in the decision list."),
    FieldSchema::new("confirm_text", FieldType::String, "Text on the confirm button."),
    FieldSchema::new("decision_group_type", Enum, "Group the decision is listed under.")
        .values(&["major", "minor", "adventurer_minor", "adventurer_major"]),
    FieldSchema::new("major", Boolean, "Show the decision in the major section.")
        .default("no"),
    FieldSchema::new("sort_order", Integer, "Position inside its group."),
    FieldSchema::new("is_shown", Trigger, "Whether the decision is listed at all.").required(),
    FieldSchema::new("is_valid", Trigger, "Requirements shown to the player."),
    FieldSchema::new(
        "is_valid_showing_failures_only",
        Trigger,
        "Requirements only listed when failing.",
    ),
    FieldSchema::new("cost", Block, "Gold, prestige or piety cost.")
        .example("cost = { gold = 100 }"),
    FieldSchema::new("minimum_cost", Block, "Lower bound for a scripted cost."),
    FieldSchema::new("cooldown", Block, "Time before the decision can be taken again."),
    FieldSchema::new("effect", Effect, "Effects executed when the decision is taken.")
        .required(),
    FieldSchema::new("ai_check_interval", Integer, "Months between AI evaluations.")
        .min(0.0)
        .example("ai_check_interval = 60"),
    FieldSchema::new("ai_potential", Trigger, "Whether the AI considers the decision."),
    FieldSchema::new("ai_will_do", Block, "AI weight for taking the decision."),
];

pub static CHARACTER_INTERACTION_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("category", FieldType::String, "Interaction menu category.").required(),
    FieldSchema::new("icon", FieldType::String, "Icon in the interaction menu."),
    FieldSchema::new("desc", FieldType::String, "Localization key for the description."),
    FieldSchema::new("common_interaction", Boolean, "Show in the common interactions bar."),
    FieldSchema::new("is_shown", Trigger, "Whether the interaction is listed at all."),
    FieldSchema::new("is_valid", Trigger, "Whether the interaction can be used."),
    FieldSchema::new(
        "is_valid_showing_failures_only",
        Trigger,
        "Requirements only listed when failing.",
    ),
    FieldSchema::new("can_send", Trigger, "Whether the actor can send the interaction."),
    FieldSchema::new("on_accept", Effect, "Effects when the recipient accepts."),
    FieldSchema::new("on_decline", Effect, "Effects when the recipient declines."),
    FieldSchema::new("on_auto_accept", Effect, "Effects when the interaction auto-accepts."),
    FieldSchema::new("auto_accept", Boolean, "Skip the recipient's answer."),
    FieldSchema::new("ai_accept", Block, "Weight for the AI recipient accepting."),
    FieldSchema::new("ai_will_do", Block, "AI weight for sending the interaction."),
    FieldSchema::new("ai_frequency", Integer, "Months between AI evaluations.").min(0.0),
    FieldSchema::new("ai_potential", Trigger, "Whether the AI considers sending it."),
    FieldSchema::new("ai_targets", Block, "Which characters the AI considers."),
    FieldSchema::new("cooldown", Block, "Time before the actor may send it again."),
    FieldSchema::new(
        "cooldown_against_recipient",
        Block,
        "Time before it can be sent to the same recipient again.",
    ),
    FieldSchema::new("popup_on_receive", Boolean, "Open a popup for the recipient."),
    FieldSchema::new("pause_on_receive", Boolean, "Pause the game for the recipient."),
    FieldSchema::new("send_option", Block, "Optional toggle shown to the actor."),
    FieldSchema::new("greeting", Enum, "Tone of the recipient's portrait.")
        .values(&["positive", "negative"]),
    FieldSchema::new("notification_text", FieldType::String, "Text of the notification."),
    FieldSchema::new("prompt", FieldType::String, "Text prompting target selection."),
];

pub static SCRIPTED_EFFECT_SCHEMA: &[FieldSchema] = &[FieldSchema::new(
    "<scripted_effect>",
    Effect,
    "Reusable effect block, called as `name = yes` or `name = { PARAM = value }`.",
)
.wildcard()];

pub static SCRIPTED_TRIGGER_SCHEMA: &[FieldSchema] = &[FieldSchema::new(
    "<scripted_trigger>",
    Trigger,
    "Reusable trigger block, called as `name = yes` or `name = { PARAM = value }`.",
)
.wildcard()];

/// Inside a scripted effect or trigger the body is ordinary script, so the
/// definition wildcard only applies at the top level.
pub fn scripted_body_schema(block_path: &[String]) -> Option<&'static [FieldSchema]> {
    if block_path.is_empty() {
        None
    } else {
        Some(&[])
    }
}

pub static ON_ACTION_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("trigger", Trigger, "Conditions for the on_action to run."),
    FieldSchema::new("effect", Effect, "Effects run when the on_action fires."),
    FieldSchema::new("events", List, "Events fired, each with an optional delay.")
        .example("events = { my_mod.0001 delay = { days = 5 } my_mod.0002 }"),
    FieldSchema::new("random_events", Block, "Weighted events, one of which fires.")
        .example("random_events = { 100 = my_mod.0001 50 = 0 }"),
    FieldSchema::new("first_valid", List, "Fire the first event whose trigger holds."),
    FieldSchema::new("on_actions", List, "Other on_actions to run."),
    FieldSchema::new("random_on_action", Block, "Weighted on_actions, one of which runs."),
    FieldSchema::new("first_valid_on_action", List, "Run the first valid on_action."),
    FieldSchema::new("weight_multiplier", Block, "Multiplier when picked from a random pool."),
    FieldSchema::new("fallback", FieldType::String, "on_action to run when nothing else fires."),
];

pub static BUILDING_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("type", Enum, "Building slot type.")
        .values(&["regular", "special", "duchy_capital"])
        .default("regular"),
    FieldSchema::new("construction_time", Integer, "Days to construct.")
        .min(0.0)
        .example("construction_time = 730"),
    FieldSchema::new("cost_gold", Integer, "Gold cost.").min(0.0),
    FieldSchema::new("cost_prestige", Integer, "Prestige cost.").min(0.0),
    FieldSchema::new("cost_piety", Integer, "Piety cost.").min(0.0),
    FieldSchema::new("levy", Integer, "Levies provided."),
    FieldSchema::new("max_garrison", Integer, "Maximum garrison size."),
    FieldSchema::new("garrison_reinforcement_factor", Float, "Garrison reinforcement rate."),
    FieldSchema::new("next_building", FieldType::String, "Upgrade of this building."),
    FieldSchema::new("can_construct_potential", Trigger, "Whether the building is listed."),
    FieldSchema::new("can_construct", Trigger, "Whether it can be built."),
    FieldSchema::new(
        "can_construct_showing_failures_only",
        Trigger,
        "Requirements only listed when failing.",
    ),
    FieldSchema::new("is_enabled", Trigger, "Whether the building's effects are active."),
    FieldSchema::new("show_disabled", Boolean, "List the building even when not buildable."),
    FieldSchema::new("province_modifier", Block, "Modifiers for the province."),
    FieldSchema::new("county_modifier", Block, "Modifiers for the county."),
    FieldSchema::new("character_modifier", Block, "Modifiers for the holder."),
    FieldSchema::new(
        "duchy_capital_county_modifier",
        Block,
        "Modifiers for the county when it is a duchy capital.",
    ),
    FieldSchema::new("flag", FieldType::String, "Building flag. May repeat."),
    FieldSchema::new("ai_value", Block, "AI weight for construction."),
    FieldSchema::new("asset", Block, "Map asset for the building."),
    FieldSchema::new("effect_desc", FieldType::String, "Custom localized effect description."),
];
