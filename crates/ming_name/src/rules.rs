//! Fortune grades for the 81 numerology rules and the 125 three-element
//! combinations.

use serde::Serialize;

use ming_texts::{Language, Message, MessageStore};

/// Fortune grade indices, worst to best. Grade 0 marks an unusable slot.
pub mod grade {
    pub const NONE: i64 = 0;
    pub const DA_XIONG: i64 = 1;
    pub const XIONG: i64 = 2;
    pub const BAN_JI: i64 = 3;
    pub const JI: i64 = 4;
    pub const DA_JI: i64 = 5;
}

// Grade of each rule number 1..=81; slot 0 is unused.
#[rustfmt::skip]
const RULE81_GRADES: [i64; 82] = [
    0, 5, 1, 5, 2, 5, 3, 4, 4, 2, 1, 5,
    2, 4, 1, 5, 5, 4, 5, 1, 1, 4, 1, 5,
    5, 4, 3, 3, 1, 4, 3, 5, 5, 5, 1, 5,
    1, 5, 3, 5, 2, 5, 3, 1, 1, 5, 1, 5,
    5, 3, 2, 3, 5, 1, 1, 3, 1, 5, 3, 1,
    1, 5, 1, 5, 1, 5, 1, 5, 5, 1, 2, 4,
    2, 3, 1, 3, 1, 3, 1, 1, 1, 5,
];

// Grade of each tian/ren/di element combination, base-5 encoded.
#[rustfmt::skip]
const THREE_ELEMENT_GRADES: [i64; 125] = [
    5, 5, 5, 1, 1, 5, 3, 5, 1, 1, 1, 3,
    1, 1, 1, 1, 1, 1, 1, 1, 5, 1, 1, 4,
    3, 5, 5, 5, 1, 1, 5, 3, 1, 1, 1, 3,
    5, 5, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1,
    1, 1, 3, 3, 1, 1, 1, 5, 3, 5, 2, 1,
    1, 5, 5, 5, 5, 1, 3, 5, 5, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 3, 5, 5, 5, 1, 1, 1, 5, 1, 1, 3,
    1, 1, 5, 1, 5, 3, 5, 1, 3, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 3, 5, 3, 1,
    3, 1, 1, 3, 1,
];

/// One of the 81 rules, with its localized texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rule81 {
    pub summary: String,
    pub details: String,
    pub rank: i64,
}

/// One three-element combination, with its localized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThreeElement {
    pub details: String,
    pub rank: i64,
}

/// Folds a grid value above 81 back into the rule range.
pub fn rule81_index(value: i64) -> i64 {
    if value > 81 { value - 80 } else { value }
}

pub fn rule81(index: i64, messages: &MessageStore, language: Language) -> Rule81 {
    let rank = usize::try_from(index)
        .ok()
        .and_then(|i| RULE81_GRADES.get(i).copied())
        .unwrap_or(grade::NONE);
    Rule81 {
        summary: messages
            .get(Message::FiveRuleSummary, index, language)
            .to_owned(),
        details: messages
            .get(Message::FiveRuleDescription, index, language)
            .to_owned(),
        rank,
    }
}

pub fn three_element(index: i64, messages: &MessageStore, language: Language) -> ThreeElement {
    let rank = usize::try_from(index)
        .ok()
        .and_then(|i| THREE_ELEMENT_GRADES.get(i).copied())
        .unwrap_or(grade::NONE);
    ThreeElement {
        details: messages
            .get(Message::ThreeElementDescription, index, language)
            .to_owned(),
        rank,
    }
}
