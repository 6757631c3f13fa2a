//! Lucky and ominous name radicals per zodiac animal sign.
//!
//! Each sign carries groups of Kangxi radical indexes. Group meanings are
//! message lines indexed cumulatively: all groups of sign 0 first (lucky
//! then ominous), then sign 1, and so on.

use serde::Serialize;

use ming_base::{KangxiRadical, radical};
use ming_texts::{Language, Message, MessageStore};

struct AnimalTemplate {
    lucky: &'static [&'static [i64]],
    ominous: &'static [&'static [i64]],
}

#[rustfmt::skip]
const TEMPLATES: [AnimalTemplate; 12] = [
    // Rat
    AnimalTemplate {
        lucky: &[
            &[12, 40],
            &[119, 151, 195],
            &[140, 167, 96],
            &[9, 75, 74],
            &[102],
        ],
        ominous: &[
            &[46],
            &[18, 19, 57],
            &[32],
            &[61],
            &[112],
            &[107, 85, 187, 164, 86],
        ],
    },
    // Ox
    AnimalTemplate {
        lucky: &[
            &[85],
            &[9, 75],
        ],
        ominous: &[
            &[74],
            &[86],
            &[102, 159, 187],
            &[112, 46],
            &[143, 120, 18, 19, 16],
        ],
    },
    // Tiger
    AnimalTemplate {
        lucky: &[
            &[46],
            &[96],
            &[167, 75, 145, 85],
            &[74, 94, 187],
        ],
        ominous: &[
            &[72, 86],
            &[102, 30, 10],
            &[120, 112, 18, 19, 143, 57, 88, 157],
        ],
    },
    // Rabbit
    AnimalTemplate {
        lucky: &[
            &[74],
            &[9, 115, 75],
            &[11, 40],
            &[167, 106, 96, 151],
            &[94],
        ],
        ominous: &[
            &[187, 164],
            &[112, 19, 18],
            &[107, 85],
            &[85, 47],
        ],
    },
    // Dragon
    AnimalTemplate {
        lucky: &[
            &[85],
            &[167, 96, 106, 155],
            &[74],
            &[195, 164, 9],
        ],
        ominous: &[
            &[32, 102, 115, 145],
            &[32, 61, 72],
            &[112, 140],
            &[19, 18],
            &[120, 94],
            &[86],
        ],
    },
    // Snake
    AnimalTemplate {
        lucky: &[
            &[140],
            &[142, 195],
            &[75, 115, 102, 46],
            &[167, 96],
            &[74, 32],
        ],
        ominous: &[
            &[61],
            &[112, 18, 143, 57],
            &[86, 9, 120],
        ],
    },
    // Horse
    AnimalTemplate {
        lucky: &[
            &[140, 167],
            &[96, 75, 115],
            &[142, 151, 119],
            &[9, 74],
            &[32],
        ],
        ominous: &[
            &[102, 86, 85],
            &[159, 112, 19, 164, 187],
        ],
    },
    // Goat
    AnimalTemplate {
        lucky: &[
            &[167, 106, 96, 140],
            &[74, 102, 151, 119],
            &[187, 115, 75, 9],
        ],
        ominous: &[
            &[61, 94, 120],
            &[159, 85, 46, 72, 86],
        ],
    },
    // Monkey
    AnimalTemplate {
        lucky: &[
            &[75, 115],
            &[167, 96, 151, 119],
            &[102, 46, 74],
            &[85, 9],
            &[46],
        ],
        ominous: &[
            &[86, 112],
            &[30, 14],
            &[120, 18, 19, 107, 94],
        ],
    },
    // Rooster
    AnimalTemplate {
        lucky: &[
            &[119, 151, 142],
            &[75, 115, 96, 102],
            &[74, 9, 14],
            &[46, 140, 72, 167],
        ],
        ominous: &[
            &[112, 94, 18, 19, 164, 143, 57, 120, 159, 187],
        ],
    },
    // Dog
    AnimalTemplate {
        lucky: &[
            &[195, 151, 119],
            &[9, 14, 187],
            &[167, 96, 140, 102, 75, 115, 74],
            &[85],
            &[9],
        ],
        ominous: &[
            &[86],
            &[112, 120, 46, 72],
            &[164, 159, 18, 88, 149],
        ],
    },
    // Pig
    AnimalTemplate {
        lucky: &[
            &[151, 119, 195],
            &[85, 167, 96],
            &[74, 75, 115],
            &[9, 46, 32, 140],
        ],
        ominous: &[
            &[120, 112, 18, 19, 143, 57, 10, 107, 88],
        ],
    },
];

/// One radical group with its resolved metadata and meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RadicalsMeaning {
    pub radical_indexes: Vec<i64>,
    pub radicals: Vec<&'static KangxiRadical>,
    pub meaning: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnimalRadicals {
    pub lucky: Vec<RadicalsMeaning>,
    pub ominous: Vec<RadicalsMeaning>,
}

/// Radical guidance for an animal sign in 0..12.
pub fn animal_radicals(
    index: i64,
    messages: &MessageStore,
    language: Language,
) -> Option<AnimalRadicals> {
    if !(0..12).contains(&index) {
        return None;
    }
    let index = index as usize;

    let mut message_index: i64 = TEMPLATES[..index]
        .iter()
        .map(|t| (t.lucky.len() + t.ominous.len()) as i64)
        .sum();

    let mut resolve = |groups: &'static [&'static [i64]]| {
        groups
            .iter()
            .map(|&group| {
                let meaning = messages
                    .get(Message::AnimalRadicalsDescription, message_index, language)
                    .to_owned();
                message_index += 1;
                RadicalsMeaning {
                    radical_indexes: group.to_vec(),
                    radicals: group.iter().filter_map(|&i| radical(i)).collect(),
                    meaning,
                }
            })
            .collect()
    };

    let lucky = resolve(TEMPLATES[index].lucky);
    let ominous = resolve(TEMPLATES[index].ominous);
    Some(AnimalRadicals { lucky, ominous })
}
