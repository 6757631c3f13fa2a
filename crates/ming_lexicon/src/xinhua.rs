//! Xinhua character dictionary.
//!
//! `dict/Xinhua.dict` holds `code||utf8||pinyin||expl$$expl||more$$more`
//! lines with the code point in decimal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::LexiconError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XinhuaEntry {
    pub unicode: u32,
    pub utf8_str: String,
    pub pinyin: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explanation: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub more: Vec<String>,
}

#[derive(Debug, Default)]
pub struct XinhuaDict {
    map: HashMap<char, XinhuaEntry>,
}

impl XinhuaDict {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(dir: &Path) -> Result<(Self, usize), LexiconError> {
        let path = dir.join("dict").join("Xinhua.dict");
        let content = fs::read_to_string(&path)
            .map_err(|e| LexiconError::Io(format!("read <{}>: {e}", path.display())))?;
        let mut map = HashMap::new();
        let mut total = 0usize;
        for line in content.lines() {
            let parts: Vec<&str> = line.split("||").collect();
            if parts.len() != 5 {
                continue;
            }
            total += 1;
            let Ok(code) = parts[0].parse::<u32>() else {
                continue;
            };
            let Some(r) = char::from_u32(code) else {
                continue;
            };
            map.entry(r).or_insert_with(|| XinhuaEntry {
                unicode: code,
                utf8_str: parts[1].to_owned(),
                pinyin: parts[2].to_owned(),
                explanation: parts[3].split("$$").map(str::to_owned).collect(),
                more: parts[4].split("$$").map(str::to_owned).collect(),
            });
        }
        Ok((Self { map }, total))
    }

    pub fn query(&self, r: char) -> Option<&XinhuaEntry> {
        self.map.get(&r)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_queries() {
        let dir = std::env::temp_dir().join("ming_lexicon_xinhua_test");
        std::fs::create_dir_all(dir.join("dict")).unwrap();
        std::fs::write(
            dir.join("dict").join("Xinhua.dict"),
            "22909||好||h\u{1ce}o||fine$$good||usage one$$usage two\nshort||line\n",
        )
        .unwrap();
        let (dict, total) = XinhuaDict::load(&dir).unwrap();
        assert_eq!(total, 1);
        let entry = dict.query('好').unwrap();
        assert_eq!(entry.explanation.len(), 2);
        assert_eq!(entry.more[1], "usage two");
        assert!(dict.query('天').is_none());
    }
}
