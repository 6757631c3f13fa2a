//! Han character store backed by the Unihan database files.
//!
//! Lines look like `U+4E00<TAB>kTotalStrokes<TAB>1`. Only the properties
//! the analyzers consume are kept: stroke counts, radical-stroke pairs,
//! pinyin readings, and simplified/traditional variant links.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use ming_base::radical;

use crate::error::LexiconError;

/// One `radical.additional` pair from a kRSUnicode / kRSKangXi value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RsCount {
    /// Kangxi radical number, 1..=214; 0 when unparsable.
    pub radical: i64,
    pub additional: u32,
}

impl RsCount {
    /// Radical strokes plus additional strokes.
    pub fn strokes(&self) -> u32 {
        let base = radical(self.radical).map(|r| u32::from(r.strokes)).unwrap_or(0);
        base + self.additional
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HanCharacter {
    pub unicode: char,
    pub total_strokes: u32,
    pub unicode_rs: Option<RsCount>,
    pub kangxi_rs: Option<RsCount>,
    pub xhc1983: Option<String>,
    pub hanyu_pinyin: Option<String>,
    pub simplified: Vec<char>,
    pub traditional: Vec<char>,
}

impl HanCharacter {
    /// Stroke count, preferring Unicode radical-stroke data over Kangxi
    /// over the bare total.
    pub fn stroke_prefer(&self) -> i64 {
        if let Some(rs) = &self.unicode_rs {
            let s = rs.strokes();
            if s > 0 {
                return i64::from(s);
            }
        }
        if let Some(rs) = &self.kangxi_rs {
            let s = rs.strokes();
            if s > 0 {
                return i64::from(s);
            }
        }
        i64::from(self.total_strokes)
    }

    pub fn simplified_prefer(&self) -> Option<char> {
        self.simplified.first().copied()
    }

    pub fn traditional_prefer(&self) -> Option<char> {
        self.traditional.first().copied()
    }
}

/// All loaded characters, keyed by code point.
#[derive(Debug, Default)]
pub struct CharacterStore {
    map: HashMap<char, HanCharacter>,
}

// The Unihan release splits properties across several files; these are the
// ones carrying properties we keep.
const UNIHAN_FILES: [&str; 4] = [
    "Unihan_DictionaryLikeData.txt",
    "Unihan_RadicalStrokeCounts.txt",
    "Unihan_Readings.txt",
    "Unihan_Variants.txt",
];

fn parse_code_point(s: &str) -> Option<char> {
    let hex = s.strip_prefix("U+")?;
    char::from_u32(u32::from_str_radix(hex, 16).ok()?)
}

fn parse_code_point_list(value: &str) -> Vec<char> {
    value.split_whitespace().filter_map(parse_code_point).collect()
}

fn parse_rs(value: &str) -> RsCount {
    let mut rs = RsCount::default();
    if let Some((rad, add)) = value.split_once('.') {
        let digits: String = rad.chars().take_while(|c| c.is_ascii_digit()).collect();
        rs.radical = digits.parse().unwrap_or(0);
        if !(0..=214).contains(&rs.radical) {
            rs.radical = 0;
        }
        let digits: String = add.chars().take_while(|c| c.is_ascii_digit()).collect();
        rs.additional = digits.parse().unwrap_or(0);
    }
    rs
}

impl CharacterStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads `<dir>/unihan/Unihan_*.txt`. Returns the store and the number
    /// of property lines consumed.
    pub fn load(dir: &Path) -> Result<(Self, usize), LexiconError> {
        let mut store = Self::default();
        let mut total = 0usize;
        for filename in UNIHAN_FILES {
            let path = dir.join("unihan").join(filename);
            let content = fs::read_to_string(&path).map_err(|e| {
                LexiconError::Io(format!("read unihan file <{}>: {e}", path.display()))
            })?;
            for line in content.lines() {
                let mut parts = line.splitn(3, '\t');
                let (Some(code), Some(property), Some(value)) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    continue;
                };
                let Some(r) = parse_code_point(code) else {
                    continue;
                };
                let entry = store.map.entry(r).or_insert_with(|| HanCharacter {
                    unicode: r,
                    ..HanCharacter::default()
                });
                entry.apply(property, value);
                total += 1;
            }
        }
        Ok((store, total))
    }

    pub fn get(&self, r: char) -> Option<&HanCharacter> {
        self.map.get(&r)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[doc(hidden)]
    pub fn insert(&mut self, c: HanCharacter) {
        self.map.insert(c.unicode, c);
    }
}

impl HanCharacter {
    fn apply(&mut self, property: &str, value: &str) {
        match property {
            "kTotalStrokes" => {
                let digits: String =
                    value.chars().take_while(|c| c.is_ascii_digit()).collect();
                self.total_strokes = digits.parse().unwrap_or(0);
            }
            "kRSUnicode" => {
                if self.unicode_rs.is_none() {
                    self.unicode_rs = Some(parse_rs(value));
                }
            }
            "kRSKangXi" => {
                if self.kangxi_rs.is_none() {
                    self.kangxi_rs = Some(parse_rs(value));
                }
            }
            "kXHC1983" => {
                if self.xhc1983.is_none() {
                    self.xhc1983 = Some(value.to_owned());
                }
            }
            "kHanyuPinyin" => {
                if self.hanyu_pinyin.is_none() {
                    self.hanyu_pinyin = Some(value.to_owned());
                }
            }
            "kSimplifiedVariant" => {
                self.simplified = parse_code_point_list(value);
            }
            "kTraditionalVariant" => {
                self.traditional = parse_code_point_list(value);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rs_count_parses_radical_and_extras() {
        let rs = parse_rs("85.5");
        assert_eq!(rs.radical, 85);
        assert_eq!(rs.additional, 5);
        // Simplified-form radicals carry an apostrophe.
        let rs = parse_rs("120'.6");
        assert_eq!(rs.radical, 120);
        assert_eq!(rs.additional, 6);
        // Out-of-range radicals are dropped.
        assert_eq!(parse_rs("999.1").radical, 0);
    }

    #[test]
    fn stroke_preference_order() {
        let mut c = HanCharacter {
            unicode: '好',
            total_strokes: 6,
            ..HanCharacter::default()
        };
        assert_eq!(c.stroke_prefer(), 6);
        // Radical 38 (woman) has 3 strokes.
        c.kangxi_rs = Some(RsCount {
            radical: 38,
            additional: 3,
        });
        assert_eq!(c.stroke_prefer(), 6);
        c.unicode_rs = Some(RsCount {
            radical: 38,
            additional: 3,
        });
        assert_eq!(c.stroke_prefer(), 6);
        c.unicode_rs = Some(RsCount {
            radical: 38,
            additional: 4,
        });
        assert_eq!(c.stroke_prefer(), 7);
    }

    #[test]
    fn loads_unihan_lines() {
        let dir = std::env::temp_dir().join("ming_lexicon_unihan_test");
        let unihan = dir.join("unihan");
        std::fs::create_dir_all(&unihan).unwrap();
        std::fs::write(
            unihan.join("Unihan_DictionaryLikeData.txt"),
            "# comment\nU+597D\tkTotalStrokes\t6\n",
        )
        .unwrap();
        std::fs::write(
            unihan.join("Unihan_RadicalStrokeCounts.txt"),
            "U+597D\tkRSUnicode\t38.3\nU+597D\tkRSKangXi\t38.3\n",
        )
        .unwrap();
        std::fs::write(
            unihan.join("Unihan_Readings.txt"),
            "U+597D\tkXHC1983\t0441.010:h\u{1ce}o 0443.010:h\u{e0}o\n",
        )
        .unwrap();
        std::fs::write(
            unihan.join("Unihan_Variants.txt"),
            "U+53F0\tkTraditionalVariant\tU+53F0 U+81FA\n",
        )
        .unwrap();

        let (store, total) = CharacterStore::load(&dir).unwrap();
        assert_eq!(total, 5);
        let hao = store.get('好').unwrap();
        assert_eq!(hao.stroke_prefer(), 6);
        assert!(hao.xhc1983.is_some());
        let tai = store.get('台').unwrap();
        assert_eq!(tai.traditional, vec!['台', '臺']);
        assert_eq!(tai.traditional_prefer(), Some('台'));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = CharacterStore::load(Path::new("/nonexistent")).unwrap_err();
        assert!(matches!(err, LexiconError::Io(_)));
    }
}
