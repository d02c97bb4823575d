/// A named entry with a user-facing description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Described {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const fn entry(name: &'static str, label: &'static str, description: &'static str) -> Described {
    Described {
        name,
        label,
        description,
    }
}

pub const STATS: &[Described] = &[
    entry("diplomacy", "Diplomacy", "Skill governing opinion, alliances and peaceful relations."),
    entry("martial", "Martial", "Skill governing command, levies and warfare."),
    entry("stewardship", "Stewardship", "Skill governing taxes, domain limit and development."),
    entry("intrigue", "Intrigue", "Skill governing schemes, secrets and hostile plots."),
    entry("learning", "Learning", "Skill governing piety, research and faith."),
    entry("prowess", "Prowess", "Personal combat ability, used in duels and as a knight."),
    entry("health", "Health", "Likelihood of staying alive; low health shortens life."),
    entry("fertility", "Fertility", "Chance of conceiving children."),
    entry("monthly_prestige", "Monthly Prestige", "Prestige gained each month."),
    entry("monthly_piety", "Monthly Piety", "Piety gained each month."),
    entry("monthly_income", "Monthly Income", "Gold gained each month."),
    entry("dread_baseline_add", "Dread Baseline", "Dread the character decays towards."),
];

pub const TRAIT_CATEGORIES: &[Described] = &[
    entry("personality", "Personality", "Core character traits. A character holds up to three."),
    entry("education", "Education", "Traits granted at adulthood from the childhood education focus."),
    entry("childhood", "Childhood", "Traits given to children, replaced by personality traits at 16."),
    entry("commander", "Commander", "Traits affecting the character when leading an army."),
    entry("winter_commander", "Winter Commander", "Commander traits tied to winter warfare."),
    entry("lifestyle", "Lifestyle", "Traits earned through lifestyle perks and activities."),
    entry("court_type", "Court Type", "Traits tied to the royal court's focus."),
    entry("fame", "Fame", "Traits representing renown, such as legendary status."),
    entry("health", "Health", "Illnesses, wounds and other health conditions."),
];

pub fn stat(name: &str) -> Option<&'static Described> {
    STATS.iter().find(|stat| stat.name == name)
}

pub fn trait_category(name: &str) -> Option<&'static Described> {
    TRAIT_CATEGORIES.iter().find(|category| category.name == name)
}

/// Buckets `|value|` into a fixed, inclusive-at-threshold magnitude label.
pub fn magnitude_band(value: f64) -> &'static str {
    let magnitude = value.abs();
    if magnitude <= 1.0 {
        "Minor"
    } else if magnitude <= 3.0 {
        "Moderate"
    } else if magnitude <= 5.0 {
        "Significant"
    } else {
        "Major"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_inclusive_at_thresholds() {
        assert_eq!(magnitude_band(1.0), "Minor");
        assert_eq!(magnitude_band(3.0), "Moderate");
        assert_eq!(magnitude_band(5.0), "Significant");
        assert_eq!(magnitude_band(6.0), "Major");
        assert_eq!(magnitude_band(-2.0), "Moderate");
        assert_eq!(magnitude_band(0.5), "Minor");
    }

    #[test]
    fn finds_stats_and_categories() {
        assert_eq!(stat("martial").unwrap().label, "Martial");
        assert!(stat("brave").is_none());
        assert!(trait_category("personality").is_some());
    }
}
