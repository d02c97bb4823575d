use super::ScriptCommand;

pub const EFFECTS: &[ScriptCommand] = &[
    ScriptCommand::new("add_gold", "character", "Adds gold to the character.")
        .example("add_gold = 100"),
    ScriptCommand::new("remove_short_term_gold", "character", "Removes gold as a short-term expense."),
    ScriptCommand::new("add_prestige", "character", "Adds prestige to the character.")
        .example("add_prestige = medium_prestige_value"),
    ScriptCommand::new("add_piety", "character", "Adds piety to the character.")
        .example("add_piety = 50"),
    ScriptCommand::new("add_dread", "character", "Adds dread to the character."),
    ScriptCommand::new("add_stress", "character", "Adds stress to the character.")
        .example("add_stress = major_stress_gain"),
    ScriptCommand::new("add_trait", "character", "Gives the character a trait.")
        .example("add_trait = brave"),
    ScriptCommand::new("remove_trait", "character", "Removes a trait from the character."),
    ScriptCommand::new("add_character_modifier", "character", "Adds a static modifier to the character.")
        .parameters(&["modifier", "days", "months", "years"])
        .example("add_character_modifier = { modifier = my_modifier years = 5 }"),
    ScriptCommand::new("remove_character_modifier", "character", "Removes a static modifier."),
    ScriptCommand::new("add_opinion", "character", "Adds an opinion modifier towards a target.")
        .parameters(&["target", "modifier", "opinion", "days", "months", "years"])
        .example("add_opinion = { target = scope:rival modifier = insulted_opinion }"),
    ScriptCommand::new("set_relation_rival", "character", "Makes the target a rival.")
        .parameters(&["target", "reason", "copy_reason"]),
    ScriptCommand::new("set_relation_friend", "character", "Makes the target a friend.")
        .parameters(&["target", "reason", "copy_reason"]),
    ScriptCommand::new("set_relation_lover", "character", "Makes the target a lover.")
        .parameters(&["target", "reason", "copy_reason"]),
    ScriptCommand::new("trigger_event", "character", "Fires an event, optionally delayed.")
        .parameters(&["id", "on_action", "days", "months", "years", "saved_event_id", "trigger_on_next_date"])
        .example("trigger_event = { id = my_mod.0002 days = 10 }"),
    ScriptCommand::new("save_scope_as", "all", "Saves the current scope under a name.")
        .example("save_scope_as = target"),
    ScriptCommand::new("save_temporary_scope_as", "all", "Saves the current scope for this effect chain."),
    ScriptCommand::new("set_variable", "all", "Sets a variable on the scope.")
        .parameters(&["name", "value", "days", "months", "years"])
        .example("set_variable = { name = my_var value = 1 }"),
    ScriptCommand::new("change_variable", "all", "Changes a numeric variable.")
        .parameters(&["name", "add", "subtract", "multiply", "divide", "modulo", "min", "max"]),
    ScriptCommand::new("remove_variable", "all", "Removes a variable from the scope."),
    ScriptCommand::new("add_to_list", "all", "Adds the scope to a named list."),
    ScriptCommand::new("add_character_flag", "character", "Sets a character flag.")
        .parameters(&["flag", "days", "months", "years"]),
    ScriptCommand::new("remove_character_flag", "character", "Removes a character flag."),
    ScriptCommand::new("death", "character", "Kills the character.")
        .parameters(&["death_reason", "killer"])
        .example("death = { death_reason = death_murder killer = scope:murderer }"),
    ScriptCommand::new("imprison", "character", "Imprisons a target.")
        .parameters(&["target", "type", "reason"]),
    ScriptCommand::new("release_from_prison", "character", "Releases the character from prison."),
    ScriptCommand::new("marry", "character", "Marries the target."),
    ScriptCommand::new("divorce", "character", "Divorces the target."),
    ScriptCommand::new("add_secret", "character", "Gives the character a secret.")
        .parameters(&["type", "target"]),
    ScriptCommand::new("create_character", "all", "Creates a new character.")
        .parameters(&["template", "location", "culture", "faith", "gender", "age", "dynasty", "employer", "save_scope_as", "trait"]),
    ScriptCommand::new("start_war", "character", "Declares war on the target.")
        .parameters(&["casus_belli", "cb", "target", "claimant", "target_title"]),
    ScriptCommand::new("create_title_and_vassal_change", "none", "Starts a batch of title changes.")
        .parameters(&["type", "save_scope_as", "add_claim_on_loss"]),
    ScriptCommand::new("change_development_level", "landed title", "Changes county development."),
    ScriptCommand::new("set_county_faith", "landed title", "Converts the county's faith."),
    ScriptCommand::new("set_county_culture", "landed title", "Converts the county's culture."),
    ScriptCommand::new("add_county_modifier", "landed title", "Adds a modifier to the county.")
        .parameters(&["modifier", "days", "months", "years"]),
    ScriptCommand::new("send_interface_message", "character", "Sends a notification message.")
        .parameters(&["type", "title", "desc", "tooltip", "left_icon", "right_icon"]),
    ScriptCommand::new("send_interface_toast", "character", "Shows a toast notification.")
        .parameters(&["type", "title", "desc", "tooltip", "left_icon", "right_icon"]),
    ScriptCommand::new("custom_tooltip", "all", "Shows a custom tooltip, optionally wrapping effects."),
    ScriptCommand::new("show_as_tooltip", "all", "Shows effects in the tooltip without running them."),
    ScriptCommand::new("hidden_effect", "all", "Runs effects without showing them in tooltips."),
    ScriptCommand::new("random", "all", "Runs the block with a percent chance.")
        .parameters(&["chance", "modifier"])
        .example("random = { chance = 25 add_gold = 10 }"),
    ScriptCommand::new("random_list", "all", "Runs one weighted entry."),
    ScriptCommand::new("duel", "character", "Runs a skill duel between two characters.")
        .parameters(&["skill", "target", "value", "localization"]),
    ScriptCommand::new("stress_impact", "character", "Adds stress based on traits.")
        .parameters(&["base", "brave", "craven", "compassionate", "callous", "sadistic", "honest", "deceitful"]),
    ScriptCommand::new("add_internal_flag", "none", "Marks an event option. Only valid in options."),
];

