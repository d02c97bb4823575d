//! `history/characters` and `history/titles`: entities whose body is a list of
//! dated blocks.

use super::FieldType::{self, Block, Boolean, Effect, Enum, Integer, List};
use super::{is_date_key, FieldSchema};

const SEXUALITY_VALUES: &[&str] = &["heterosexual", "homosexual", "bisexual", "asexual"];

pub static CHARACTER_HISTORY_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("name", FieldType::String, "Character's first name.")
        .required()
        .example("name = \"Harald\""),
    FieldSchema::new("dynasty", FieldType::String, "Dynasty id."),
    FieldSchema::new("dynasty_house", FieldType::String, "Cadet house id."),
    FieldSchema::new("female", Boolean, "Whether the character is female.").default("no"),
    FieldSchema::new("religion", FieldType::String, "Starting faith (legacy key)."),
    FieldSchema::new("faith", FieldType::String, "Starting faith."),
    FieldSchema::new("culture", FieldType::String, "Starting culture.").required(),
    FieldSchema::new("father", FieldType::String, "Character id of the father."),
    FieldSchema::new("mother", FieldType::String, "Character id of the mother."),
    FieldSchema::new("dna", FieldType::String, "Portrait DNA id."),
    FieldSchema::new("trait", FieldType::String, "Starting trait. May repeat.")
        .example("trait = brave"),
    FieldSchema::new("disallow_random_traits", Boolean, "Do not roll random traits."),
    FieldSchema::new("sexuality", Enum, "Fixed sexuality.").values(SEXUALITY_VALUES),
    FieldSchema::new("diplomacy", Integer, "Base Diplomacy skill.").range(0.0, 100.0),
    FieldSchema::new("martial", Integer, "Base Martial skill.").range(0.0, 100.0),
    FieldSchema::new("stewardship", Integer, "Base Stewardship skill.").range(0.0, 100.0),
    FieldSchema::new("intrigue", Integer, "Base Intrigue skill.").range(0.0, 100.0),
    FieldSchema::new("learning", Integer, "Base Learning skill.").range(0.0, 100.0),
    FieldSchema::new("prowess", Integer, "Base Prowess.").range(0.0, 100.0),
    FieldSchema::new("<date>", Block, "Changes applied on this date.")
        .wildcard()
        .example("1066.1.1 = {\n\tbirth = yes\n}"),
];

pub static CHARACTER_DATE_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("birth", Boolean, "The character is born on this date.")
        .values(&["yes"]),
    FieldSchema::new("death", Block, "The character dies on this date.")
        .example("death = { death_reason = death_battle killer = 163110 }"),
    FieldSchema::new("employer", FieldType::String, "Character id of the employer."),
    FieldSchema::new("add_spouse", FieldType::String, "Character id of a spouse."),
    FieldSchema::new("add_matrilineal_spouse", FieldType::String, "Character id of a matrilineal spouse."),
    FieldSchema::new("add_concubine", FieldType::String, "Character id of a concubine."),
    FieldSchema::new("remove_spouse", FieldType::String, "Character id of a divorced spouse."),
    FieldSchema::new("add_trait", FieldType::String, "Trait gained on this date."),
    FieldSchema::new("remove_trait", FieldType::String, "Trait lost on this date."),
    FieldSchema::new("give_nickname", FieldType::String, "Nickname gained on this date."),
    FieldSchema::new("religion", FieldType::String, "Conversion on this date (legacy key)."),
    FieldSchema::new("faith", FieldType::String, "Conversion on this date."),
    FieldSchema::new("culture", FieldType::String, "Culture change on this date."),
    FieldSchema::new("name", FieldType::String, "Name change on this date."),
    FieldSchema::new("effect", Effect, "Arbitrary effects run on this date."),
];

pub static DEATH_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("death_reason", FieldType::String, "Death reason key.")
        .example("death_reason = death_battle"),
    FieldSchema::new("killer", FieldType::String, "Character id of the killer."),
];

pub static TITLE_HISTORY_SCHEMA: &[FieldSchema] = &[FieldSchema::new(
    "<date>",
    Block,
    "Changes to the title applied on this date.",
)
.wildcard()
.example("1066.1.1 = {\n\tholder = 163110\n}")];

pub static TITLE_DATE_SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("holder", FieldType::String, "Character id of the new holder, `0` for none.")
        .example("holder = 163110"),
    FieldSchema::new("liege", FieldType::String, "Title of the new de facto liege, `0` for none."),
    FieldSchema::new("de_jure_liege", FieldType::String, "Title of the new de jure liege."),
    FieldSchema::new("government", FieldType::String, "Government type of the holder."),
    FieldSchema::new("succession_laws", List, "Title succession laws."),
    FieldSchema::new(
        "change_development_level",
        Integer,
        "Adjusts county development.",
    ),
    FieldSchema::new("insert_title_history", FieldType::String, "Copy history from another title."),
    FieldSchema::new("effect", Effect, "Arbitrary effects run on this date."),
];

pub fn character_schema_for_block_path(block_path: &[String]) -> Option<&'static [FieldSchema]> {
    match block_path {
        [] => None,
        [_character] => Some(CHARACTER_HISTORY_SCHEMA),
        [_character, date] if is_date_key(date) => Some(CHARACTER_DATE_SCHEMA),
        [.., last] if last == "death" => Some(DEATH_SCHEMA),
        _ => Some(&[]),
    }
}

pub fn title_schema_for_block_path(block_path: &[String]) -> Option<&'static [FieldSchema]> {
    match block_path {
        [] => None,
        [_title] => Some(TITLE_HISTORY_SCHEMA),
        [_title, date] if is_date_key(date) => Some(TITLE_DATE_SCHEMA),
        _ => Some(&[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dated_blocks_use_date_schema() {
        assert_eq!(
            character_schema_for_block_path(&path(&["163110", "1066.9.15"])),
            Some(CHARACTER_DATE_SCHEMA)
        );
        assert_eq!(
            character_schema_for_block_path(&path(&["163110", "1066.9.15", "death"])),
            Some(DEATH_SCHEMA)
        );
        assert_eq!(
            title_schema_for_block_path(&path(&["k_england", "1066.10.14"])),
            Some(TITLE_DATE_SCHEMA)
        );
    }
}
