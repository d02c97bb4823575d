//! Global script vocabulary: effects, triggers, stats, trait categories and
//! the parameter sets of well-known blocks.

pub mod blocks;
pub mod effects;
pub mod stats;
pub mod triggers;

use std::collections::HashMap;
use std::sync::LazyLock;

/// An effect or trigger usable in script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptCommand {
    pub name: &'static str,
    pub description: &'static str,
    /// Scopes the command is valid in, as shown to the user.
    pub scopes: &'static str,
    /// Keys accepted inside the command's own block.
    pub parameters: &'static [&'static str],
    pub example: Option<&'static str>,
}

impl ScriptCommand {
    pub const fn new(
        name: &'static str,
        scopes: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            scopes,
            parameters: &[],
            example: None,
        }
    }

    pub const fn parameters(self, parameters: &'static [&'static str]) -> Self {
        Self { parameters, ..self }
    }

    pub const fn example(self, example: &'static str) -> Self {
        Self {
            example: Some(example),
            ..self
        }
    }

    pub fn has_parameter(&self, key: &str) -> bool {
        self.parameters.contains(&key)
    }
}

fn index(commands: &'static [ScriptCommand]) -> HashMap<&'static str, &'static ScriptCommand> {
    commands.iter().map(|command| (command.name, command)).collect()
}

static EFFECT_INDEX: LazyLock<HashMap<&'static str, &'static ScriptCommand>> =
    LazyLock::new(|| index(effects::EFFECTS));

static TRIGGER_INDEX: LazyLock<HashMap<&'static str, &'static ScriptCommand>> =
    LazyLock::new(|| index(triggers::TRIGGERS));

pub fn effect(name: &str) -> Option<&'static ScriptCommand> {
    EFFECT_INDEX.get(name).copied()
}

pub fn trigger(name: &str) -> Option<&'static ScriptCommand> {
    TRIGGER_INDEX.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn command_names_are_unique() {
        for table in [effects::EFFECTS, triggers::TRIGGERS] {
            let mut seen = HashSet::new();
            for command in table {
                assert!(seen.insert(command.name), "duplicate entry {}", command.name);
            }
        }
    }

    #[test]
    fn looks_up_commands_by_name() {
        let command = effect("trigger_event").unwrap();
        assert!(command.has_parameter("days"));
        assert!(trigger("has_trait").is_some());
        assert!(effect("has_trait").is_none());
    }
}
