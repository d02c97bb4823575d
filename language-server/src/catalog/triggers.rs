use super::ScriptCommand;

pub const TRIGGERS: &[ScriptCommand] = &[
    ScriptCommand::new("always", "all", "Always true with `yes`, always false with `no`.")
        .example("always = no"),
    ScriptCommand::new("exists", "all", "Whether the target scope exists.")
        .example("exists = scope:target"),
    ScriptCommand::new("is_alive", "character", "Whether the character is alive."),
    ScriptCommand::new("is_adult", "character", "Whether the character is an adult."),
    ScriptCommand::new("is_ai", "character", "Whether the character is controlled by the AI."),
    ScriptCommand::new("is_ruler", "character", "Whether the character holds a title."),
    ScriptCommand::new("is_landed", "character", "Whether the character holds a landed title."),
    ScriptCommand::new("is_female", "character", "Whether the character is female."),
    ScriptCommand::new("is_male", "character", "Whether the character is male."),
    ScriptCommand::new("is_imprisoned", "character", "Whether the character is in prison."),
    ScriptCommand::new("is_at_war", "character", "Whether the character is at war."),
    ScriptCommand::new("age", "character", "Compares the character's age.")
        .example("age >= 16"),
    ScriptCommand::new("gold", "character", "Compares the character's gold."),
    ScriptCommand::new("prestige", "character", "Compares the character's prestige."),
    ScriptCommand::new("piety", "character", "Compares the character's piety."),
    ScriptCommand::new("stress", "character", "Compares the character's stress."),
    ScriptCommand::new("has_trait", "character", "Whether the character has a trait.")
        .example("has_trait = brave"),
    ScriptCommand::new("has_trait_xp", "character", "Compares experience in a trait track.")
        .parameters(&["trait", "track", "value"]),
    ScriptCommand::new("has_character_flag", "character", "Whether a character flag is set."),
    ScriptCommand::new("has_character_modifier", "character", "Whether a static modifier is present."),
    ScriptCommand::new("has_variable", "all", "Whether a variable is set on the scope."),
    ScriptCommand::new("has_culture", "character", "Whether the character has a culture."),
    ScriptCommand::new("has_faith", "character", "Whether the character has a faith."),
    ScriptCommand::new("has_religion", "character", "Whether the character's faith is in a religion."),
    ScriptCommand::new("has_government", "character", "Compares the government type."),
    ScriptCommand::new("has_title", "character", "Whether the character holds a title."),
    ScriptCommand::new("has_claim_on", "character", "Whether the character claims a title."),
    ScriptCommand::new("is_close_family_of", "character", "Whether the target is close family."),
    ScriptCommand::new("is_spouse_of", "character", "Whether the target is a spouse."),
    ScriptCommand::new("has_relation_rival", "character", "Whether the target is a rival."),
    ScriptCommand::new("has_relation_friend", "character", "Whether the target is a friend."),
    ScriptCommand::new("opinion", "character", "Compares opinion of a target.")
        .parameters(&["target", "value"])
        .example("opinion = { target = scope:liege value >= 20 }"),
    ScriptCommand::new("reverse_opinion", "character", "Compares a target's opinion of this character.")
        .parameters(&["target", "value"]),
    ScriptCommand::new("diplomacy", "character", "Compares the Diplomacy skill."),
    ScriptCommand::new("martial", "character", "Compares the Martial skill."),
    ScriptCommand::new("stewardship", "character", "Compares the Stewardship skill."),
    ScriptCommand::new("intrigue", "character", "Compares the Intrigue skill."),
    ScriptCommand::new("learning", "character", "Compares the Learning skill."),
    ScriptCommand::new("prowess", "character", "Compares Prowess."),
    ScriptCommand::new("highest_held_title_tier", "character", "Compares the highest title tier held."),
    ScriptCommand::new("realm_size", "character", "Compares the number of counties in the realm."),
    ScriptCommand::new("ai_boldness", "character", "Compares the AI boldness value."),
    ScriptCommand::new("ai_greed", "character", "Compares the AI greed value."),
    ScriptCommand::new("ai_compassion", "character", "Compares the AI compassion value."),
    ScriptCommand::new("ai_honor", "character", "Compares the AI honor value."),
    ScriptCommand::new("ai_rationality", "character", "Compares the AI rationality value."),
    ScriptCommand::new("ai_vengefulness", "character", "Compares the AI vengefulness value."),
    ScriptCommand::new("ai_sociability", "character", "Compares the AI sociability value."),
    ScriptCommand::new("ai_energy", "character", "Compares the AI energy value."),
    ScriptCommand::new("development_level", "landed title", "Compares county development."),
    ScriptCommand::new("tier", "landed title", "Compares the title tier."),
    ScriptCommand::new("is_in_list", "all", "Whether the scope is in a named list."),
    ScriptCommand::new("is_target_in_variable_list", "all", "Whether a target is in a variable list.")
        .parameters(&["name", "target"]),
    ScriptCommand::new("custom_description", "all", "Wraps triggers with a custom tooltip.")
        .parameters(&["text", "subject", "object", "value"]),
    ScriptCommand::new("trigger_if", "all", "Evaluates the block only when `limit` holds.")
        .parameters(&["limit"]),
    ScriptCommand::new("calc_true_if", "all", "True if at least `amount` of the triggers hold.")
        .parameters(&["amount"]),
    ScriptCommand::new("current_year", "none", "Compares the current game year."),
    ScriptCommand::new("has_game_rule", "none", "Whether a game rule is active."),
    ScriptCommand::new("has_dlc_feature", "none", "Whether a DLC feature is enabled."),
];
