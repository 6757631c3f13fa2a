//! Name model: original, simplified, and traditional renditions with
//! per-character strokes, five elements, and pinyin.

use serde::Serialize;

use ming_lexicon::{HanCharacter, Lexicon};

/// Element index of a character, -1 when the list has no assignment.
const ELEMENT_UNKNOWN: i64 = -1;

// Characters whose general traditional variant is wrong for names; these
// override the Unihan link.
const TRADITIONAL_OVERRIDES: [(u32, u32); 31] = [
    (20040, 20040),
    (20266, 20605),
    (20313, 20313),
    (20914, 20914),
    (21382, 26310),
    (21457, 30332),
    (21488, 33274),
    (21516, 21516),
    (21518, 21518),
    (22363, 22727),
    (22797, 24489),
    (23613, 23613),
    (24178, 24178),
    (24182, 20006),
    (24403, 30070),
    (24449, 24449),
    (24535, 24535),
    (24895, 24895),
    (26497, 26497),
    (27719, 21295),
    (30839, 30982),
    (31995, 31995),
    (32993, 32993),
    (33039, 33247),
    (33633, 30442),
    (33719, 29554),
    (34593, 34593),
    (37319, 37319),
    (38047, 37758),
    (39035, 38920),
    (40941, 37480),
];

/// One name part in one rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameSpec {
    pub runes: Vec<char>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<i64>,
    pub five_elements: Vec<i64>,
    pub string: String,
    pub length: usize,
}

impl NameSpec {
    fn from_characters(characters: &[HanCharacter], lexicon: &Lexicon) -> Self {
        let mut spec = NameSpec::default();
        for c in characters {
            spec.runes.push(c.unicode);
            spec.strokes.push(c.stroke_prefer());
            spec.five_elements.push(
                lexicon
                    .five_elements
                    .query(c.unicode)
                    .map(|e| e.index())
                    .unwrap_or(ELEMENT_UNKNOWN),
            );
        }
        spec.length = spec.runes.len();
        spec.string = spec.runes.iter().collect();
        spec
    }
}

/// One full rendition: family, middle, given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameDef {
    pub family_name: NameSpec,
    pub middle_name: NameSpec,
    pub given_name: NameSpec,
    pub full_name: String,
}

/// A normalized name. Characters unknown to the lexicon are dropped
/// during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Name {
    pub original: NameDef,
    pub simplified: NameDef,
    pub traditional: NameDef,
    pub pinyin_tone: Vec<String>,
    pub pinyin: Vec<String>,
}

fn strip_tone(pinyin: &str) -> String {
    let mut out = String::with_capacity(pinyin.len());
    for c in pinyin.chars() {
        match c {
            'ā' | 'á' | 'ǎ' | 'à' => out.push('a'),
            'ō' | 'ó' | 'ǒ' | 'ò' => out.push('o'),
            'ê' | 'ē' | 'é' | 'ě' | 'è' => out.push('e'),
            'ī' | 'í' | 'ǐ' | 'ì' => out.push('i'),
            'ū' | 'ú' | 'ǔ' | 'ù' => out.push('u'),
            'ǖ' | 'ǘ' | 'ǚ' | 'ǜ' | 'ü' => out.push_str("yu"),
            _ => out.push(c),
        }
    }
    out
}

// The kXHC1983 reading looks like "0441.010:hǎo ..."; kHanyuPinyin like
// "10001.010:tiān,tian". Both yield "position:readings".
fn reading_pinyin(c: &HanCharacter) -> (String, String) {
    let reading = c
        .xhc1983
        .as_deref()
        .and_then(|r| r.split_whitespace().next())
        .or(c.hanyu_pinyin.as_deref());
    let Some(reading) = reading else {
        return ("_".to_owned(), "_".to_owned());
    };
    let Some((_, readings)) = reading.split_once(':') else {
        return ("_".to_owned(), "_".to_owned());
    };
    let toned = readings.split(',').next().unwrap_or("").to_owned();
    (strip_tone(&toned), toned)
}

fn lookup(text: &str, lexicon: &Lexicon) -> Vec<HanCharacter> {
    text.chars()
        .filter_map(|r| lexicon.characters.get(r).cloned())
        .collect()
}

fn simplify(characters: &[HanCharacter], lexicon: &Lexicon) -> Vec<HanCharacter> {
    characters
        .iter()
        .map(|c| {
            c.simplified_prefer()
                .and_then(|r| lexicon.characters.get(r).cloned())
                .unwrap_or_else(|| c.clone())
        })
        .collect()
}

fn traditionalize(characters: &[HanCharacter], lexicon: &Lexicon) -> Vec<HanCharacter> {
    characters
        .iter()
        .map(|c| {
            let code = c.unicode as u32;
            let special = TRADITIONAL_OVERRIDES
                .iter()
                .find(|(from, _)| *from == code)
                .and_then(|&(_, to)| char::from_u32(to));
            special
                .or_else(|| c.traditional_prefer())
                .and_then(|r| lexicon.characters.get(r).cloned())
                .unwrap_or_else(|| c.clone())
        })
        .collect()
}

impl Name {
    pub fn new(family_name: &str, middle_name: &str, given_name: &str, lexicon: &Lexicon) -> Self {
        let family = lookup(family_name, lexicon);
        let middle = lookup(middle_name, lexicon);
        let given = lookup(given_name, lexicon);

        let mut name = Name::default();
        name.original = Self::build_def(&family, &middle, &given, lexicon);
        name.simplified = Self::build_def(
            &simplify(&family, lexicon),
            &simplify(&middle, lexicon),
            &simplify(&given, lexicon),
            lexicon,
        );
        name.traditional = Self::build_def(
            &traditionalize(&family, lexicon),
            &traditionalize(&middle, lexicon),
            &traditionalize(&given, lexicon),
            lexicon,
        );

        // Unknown elements in the original and traditional renditions fall
        // back to the simplified assignment.
        backfill(&mut name.original, &name.simplified);
        backfill(&mut name.traditional, &name.simplified);

        for c in family.iter().chain(middle.iter()).chain(given.iter()) {
            let (plain, toned) = reading_pinyin(c);
            name.pinyin.push(plain);
            name.pinyin_tone.push(toned);
        }

        name
    }

    fn build_def(
        family: &[HanCharacter],
        middle: &[HanCharacter],
        given: &[HanCharacter],
        lexicon: &Lexicon,
    ) -> NameDef {
        let mut def = NameDef {
            family_name: NameSpec::from_characters(family, lexicon),
            middle_name: NameSpec::from_characters(middle, lexicon),
            given_name: NameSpec::from_characters(given, lexicon),
            full_name: String::new(),
        };
        def.full_name = format!("{} {}", def.family_name.string, def.given_name.string);
        def
    }
}

fn backfill(target: &mut NameDef, simplified: &NameDef) {
    for (part, source) in [
        (&mut target.family_name, &simplified.family_name),
        (&mut target.middle_name, &simplified.middle_name),
        (&mut target.given_name, &simplified.given_name),
    ] {
        for (i, v) in part.five_elements.iter_mut().enumerate() {
            if *v == ELEMENT_UNKNOWN {
                if let Some(&s) = source.five_elements.get(i) {
                    *v = s;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ming_lexicon::CharacterStore;

    fn character(r: char, strokes: u32, xhc: Option<&str>) -> HanCharacter {
        HanCharacter {
            unicode: r,
            total_strokes: strokes,
            xhc1983: xhc.map(str::to_owned),
            ..HanCharacter::default()
        }
    }

    fn fixture() -> Lexicon {
        let mut store = CharacterStore::empty();
        store.insert(character('李', 7, Some("0702.070:lǐ")));
        store.insert(character('明', 8, Some("0838.020:míng")));
        let mut tai = character('台', 5, Some("1189.010:tái"));
        tai.traditional = vec!['台', '臺'];
        store.insert(tai);
        store.insert(character('臺', 14, None));
        Lexicon {
            characters: store,
            ..Lexicon::empty()
        }
    }

    #[test]
    fn tone_stripping() {
        assert_eq!(strip_tone("hǎo"), "hao");
        assert_eq!(strip_tone("lǜ"), "lyu");
        assert_eq!(strip_tone("ming"), "ming");
    }

    #[test]
    fn builds_all_renditions() {
        let lex = fixture();
        let name = Name::new("李", "", "明", &lex);
        assert_eq!(name.original.family_name.strokes, vec![7]);
        assert_eq!(name.original.given_name.strokes, vec![8]);
        assert_eq!(name.original.full_name, "李 明");
        assert_eq!(name.pinyin, vec!["li", "ming"]);
        assert_eq!(name.pinyin_tone, vec!["lǐ", "míng"]);
        // No variant data: renditions coincide.
        assert_eq!(name.simplified.full_name, "李 明");
        assert_eq!(name.traditional.full_name, "李 明");
        // No five-element list loaded.
        assert_eq!(name.original.family_name.five_elements, vec![-1]);
    }

    #[test]
    fn traditional_override_beats_the_unihan_link() {
        let lex = fixture();
        let name = Name::new("李", "", "台", &lex);
        // The Unihan link for 台 lists the self-referential variant first;
        // the override table forces 臺.
        assert_eq!(name.traditional.given_name.string, "臺");
        assert_eq!(name.traditional.given_name.strokes, vec![14]);
        assert_eq!(name.simplified.given_name.string, "台");
    }

    #[test]
    fn unknown_characters_are_dropped() {
        let lex = fixture();
        let name = Name::new("李", "", "明X", &lex);
        assert_eq!(name.original.given_name.length, 1);
        assert_eq!(name.pinyin.len(), 2);
    }
}
