//! Character and realm modifiers shared by traits, buildings, traditions and
//! `common/modifiers` files.

use super::{FieldSchema, FieldType::Modifier};

pub static MODIFIER_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("diplomacy", Modifier, "Flat change to the Diplomacy skill.")
        .example("diplomacy = 2"),
    FieldSchema::new("martial", Modifier, "Flat change to the Martial skill.")
        .example("martial = 2"),
    FieldSchema::new("stewardship", Modifier, "Flat change to the Stewardship skill.")
        .example("stewardship = 2"),
    FieldSchema::new("intrigue", Modifier, "Flat change to the Intrigue skill.")
        .example("intrigue = 2"),
    FieldSchema::new("learning", Modifier, "Flat change to the Learning skill.")
        .example("learning = 2"),
    FieldSchema::new("prowess", Modifier, "Flat change to personal Prowess.")
        .example("prowess = 4"),
    FieldSchema::new("health", Modifier, "Change to the character's Health.")
        .example("health = -0.5"),
    FieldSchema::new("fertility", Modifier, "Change to the character's Fertility.")
        .example("fertility = 0.1"),
    FieldSchema::new("attraction_opinion", Modifier, "Opinion bonus from attraction.")
        .example("attraction_opinion = 10"),
    FieldSchema::new("general_opinion", Modifier, "Opinion of everyone towards the character."),
    FieldSchema::new("vassal_opinion", Modifier, "Opinion of vassals towards the character."),
    FieldSchema::new("same_opinion", Modifier, "Opinion of characters sharing this trait."),
    FieldSchema::new(
        "opposite_opinion",
        Modifier,
        "Opinion of characters with an opposite trait.",
    ),
    FieldSchema::new("clergy_opinion", Modifier, "Opinion of clergy towards the character."),
    FieldSchema::new("monthly_prestige", Modifier, "Flat monthly Prestige gain."),
    FieldSchema::new(
        "monthly_prestige_gain_mult",
        Modifier,
        "Multiplier on monthly Prestige gain.",
    ),
    FieldSchema::new("monthly_piety", Modifier, "Flat monthly Piety gain."),
    FieldSchema::new("monthly_piety_gain_mult", Modifier, "Multiplier on monthly Piety gain."),
    FieldSchema::new("monthly_income", Modifier, "Flat monthly Gold income."),
    FieldSchema::new("monthly_income_mult", Modifier, "Multiplier on monthly Gold income."),
    FieldSchema::new("stress_gain_mult", Modifier, "Multiplier on Stress gained.")
        .example("stress_gain_mult = 0.2"),
    FieldSchema::new("stress_loss_mult", Modifier, "Multiplier on Stress lost."),
    FieldSchema::new("dread_baseline_add", Modifier, "Change to the baseline Dread."),
    FieldSchema::new("life_expectancy", Modifier, "Years added to life expectancy."),
    FieldSchema::new("knight_limit", Modifier, "Change to the number of Knights allowed."),
    FieldSchema::new("levy_size", Modifier, "Multiplier on levy size."),
    FieldSchema::new("tax_mult", Modifier, "Multiplier on tax income."),
    FieldSchema::new("development_growth", Modifier, "Flat development growth."),
    FieldSchema::new("development_growth_factor", Modifier, "Multiplier on development growth."),
    FieldSchema::new("build_speed", Modifier, "Change to construction time."),
    FieldSchema::new("build_gold_cost", Modifier, "Change to building Gold cost."),
    FieldSchema::new("hostile_scheme_power_add", Modifier, "Flat power for hostile schemes."),
    FieldSchema::new(
        "hostile_scheme_resistance_add",
        Modifier,
        "Flat resistance against hostile schemes.",
    ),
    FieldSchema::new("negate_health_penalty_add", Modifier, "Offsets health penalties."),
];
