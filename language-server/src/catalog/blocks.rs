//! Well-known block names and the parameters they accept.

use super::{effect, trigger};

/// Blocks whose body is a list of triggers.
const TRIGGER_BLOCKS: &[&str] = &[
    "trigger",
    "limit",
    "alternative_limit",
    "potential",
    "is_shown",
    "is_valid",
    "is_valid_showing_failures_only",
    "allow",
    "can_send",
    "can_pick",
    "can_progress",
    "can_construct",
    "can_construct_potential",
    "can_construct_showing_failures_only",
    "is_enabled",
    "is_available_on_create",
    "ai_potential",
    "show_as_unavailable",
    "modifier",
];

/// Blocks whose body is a list of effects.
const EFFECT_BLOCKS: &[&str] = &[
    "immediate",
    "effect",
    "option",
    "after",
    "on_accept",
    "on_decline",
    "on_auto_accept",
    "hidden_effect",
    "show_as_tooltip",
    "custom_tooltip",
    "random",
    "random_list",
];

/// Blocks that take the context of whatever encloses them.
const CONTROL_BLOCKS: &[&str] = &[
    "if",
    "else_if",
    "else",
    "while",
    "switch",
    "AND",
    "OR",
    "NOT",
    "NOR",
    "NAND",
    "trigger_if",
    "trigger_else_if",
    "trigger_else",
    "calc_true_if",
    "custom_description",
];

/// Blocks evaluated as a weight rather than as triggers or effects.
const WEIGHT_BLOCKS: &[&str] = &[
    "ai_will_do",
    "ai_chance",
    "ai_accept",
    "ai_value",
    "weight",
    "weight_multiplier",
    "modifier",
    "opinion_modifier",
    "compare_modifier",
];

/// `random_` names that are not list iterators.
const NON_ITERATORS: &[&str] = &["random_list", "random_events", "random_on_action"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockParameter {
    pub name: &'static str,
    pub description: Option<&'static str>,
}

const fn param(name: &'static str, description: &'static str) -> BlockParameter {
    BlockParameter {
        name,
        description: Some(description),
    }
}

const fn bare(name: &'static str) -> BlockParameter {
    BlockParameter {
        name,
        description: None,
    }
}

pub const WEIGHT_PARAMETERS: &[BlockParameter] = &[
    param("base", "Starting value of the weight before any modifier applies."),
    param("add", "Added to the running weight when the enclosing modifier's triggers hold."),
    param("factor", "Multiplies the running weight when the enclosing modifier's triggers hold."),
    param("multiply", "Multiplies the running weight."),
    param("divide", "Divides the running weight."),
    param(
        "modifier",
        "Conditional adjustment: `add` or `factor` applied only when its triggers hold.",
    ),
    param("min", "Lower bound for the final weight."),
    param("max", "Upper bound for the final weight."),
    bare("value"),
    bare("opinion_modifier"),
    bare("compare_modifier"),
    bare("desc"),
];

const ANY_PARAMETERS: &[BlockParameter] = &[
    param("count", "How many entries must match; `all` requires every entry."),
    param("percent", "Fraction of entries (0 to 1) that must match."),
];

const EVERY_PARAMETERS: &[BlockParameter] = &[
    param("limit", "Only entries matching these triggers are affected."),
    param("alternative_limit", "Fallback limit used when nothing matches `limit`."),
];

const RANDOM_PARAMETERS: &[BlockParameter] = &[
    param("limit", "Only entries matching these triggers can be picked."),
    param("alternative_limit", "Fallback limit used when nothing matches `limit`."),
    param("weight", "Weights the pick between matching entries."),
];

const ORDERED_PARAMETERS: &[BlockParameter] = &[
    param("limit", "Only entries matching these triggers are ordered."),
    param("order_by", "Script value used to sort the entries, highest first."),
    param("position", "Index into the ordered list, starting at 0."),
    param("min", "Minimum number of entries to affect."),
    param("max", "Maximum number of entries to affect."),
    param("check_range_bounds", "Fail when the list is shorter than `max`."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorKind {
    Any,
    Every,
    Random,
    Ordered,
}

impl IteratorKind {
    pub fn of(block: &str) -> Option<Self> {
        if NON_ITERATORS.contains(&block) {
            return None;
        }
        let (kind, rest) = if let Some(rest) = block.strip_prefix("any_") {
            (IteratorKind::Any, rest)
        } else if let Some(rest) = block.strip_prefix("every_") {
            (IteratorKind::Every, rest)
        } else if let Some(rest) = block.strip_prefix("random_") {
            (IteratorKind::Random, rest)
        } else if let Some(rest) = block.strip_prefix("ordered_") {
            (IteratorKind::Ordered, rest)
        } else {
            return None;
        };
        (!rest.is_empty()).then_some(kind)
    }

    pub fn parameters(self) -> &'static [BlockParameter] {
        match self {
            IteratorKind::Any => ANY_PARAMETERS,
            IteratorKind::Every => EVERY_PARAMETERS,
            IteratorKind::Random => RANDOM_PARAMETERS,
            IteratorKind::Ordered => ORDERED_PARAMETERS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Trigger,
    Effect,
    Control,
    Weight,
    /// The block of a known effect or trigger that takes named parameters.
    Parameters,
    Unknown,
}

pub fn classify(block: &str) -> BlockKind {
    if CONTROL_BLOCKS.contains(&block) {
        BlockKind::Control
    } else if TRIGGER_BLOCKS.contains(&block) {
        BlockKind::Trigger
    } else if WEIGHT_BLOCKS.contains(&block) {
        BlockKind::Weight
    } else if EFFECT_BLOCKS.contains(&block) {
        BlockKind::Effect
    } else if let Some(kind) = IteratorKind::of(block) {
        match kind {
            IteratorKind::Any => BlockKind::Trigger,
            _ => BlockKind::Effect,
        }
    } else if effect(block)
        .or_else(|| trigger(block))
        .is_some_and(|command| !command.parameters.is_empty())
    {
        BlockKind::Parameters
    } else {
        BlockKind::Unknown
    }
}

pub fn is_weight_block(block: &str) -> bool {
    WEIGHT_BLOCKS.contains(&block)
}

pub fn weight_parameter(block: &str, key: &str) -> Option<&'static BlockParameter> {
    if !is_weight_block(block) {
        return None;
    }
    WEIGHT_PARAMETERS.iter().find(|parameter| parameter.name == key)
}

pub fn iterator_parameter(block: &str, key: &str) -> Option<&'static BlockParameter> {
    IteratorKind::of(block)?
        .parameters()
        .iter()
        .find(|parameter| parameter.name == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_iterators_by_prefix() {
        assert_eq!(classify("any_vassal"), BlockKind::Trigger);
        assert_eq!(classify("every_courtier"), BlockKind::Effect);
        assert_eq!(classify("ordered_child"), BlockKind::Effect);
        assert_eq!(IteratorKind::of("random_list"), None);
        assert_eq!(IteratorKind::of("any_"), None);
    }

    #[test]
    fn modifier_is_a_trigger_block_with_weight_parameters() {
        assert_eq!(classify("modifier"), BlockKind::Trigger);
        assert!(weight_parameter("modifier", "add").is_some());
        assert!(weight_parameter("limit", "add").is_none());
    }

    #[test]
    fn parameterized_commands_are_parameter_blocks() {
        assert_eq!(classify("trigger_event"), BlockKind::Parameters);
        assert_eq!(classify("add_gold"), BlockKind::Unknown);
        assert_eq!(classify("my_scripted_effect"), BlockKind::Unknown);
    }

    #[test]
    fn finds_iterator_parameters() {
        assert_eq!(
            iterator_parameter("ordered_vassal", "order_by").unwrap().name,
            "order_by"
        );
        assert!(iterator_parameter("any_vassal", "order_by").is_none());
    }
}
