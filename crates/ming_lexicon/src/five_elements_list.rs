//! Per-character five-element assignments.
//!
//! `list/CharacterFiveElements.txt` holds `code,element` lines with the
//! code point in decimal and the element index in 0..5.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ming_base::Element;

use crate::error::LexiconError;

#[derive(Debug, Default)]
pub struct FiveElementList {
    map: HashMap<char, Element>,
}

impl FiveElementList {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(dir: &Path) -> Result<(Self, usize), LexiconError> {
        let path = dir.join("list").join("CharacterFiveElements.txt");
        let content = fs::read_to_string(&path)
            .map_err(|e| LexiconError::Io(format!("read <{}>: {e}", path.display())))?;
        let mut map = HashMap::new();
        let mut total = 0usize;
        for line in content.lines() {
            let Some((code, element)) = line.split_once(',') else {
                continue;
            };
            let (Ok(code), Ok(element)) = (code.parse::<u32>(), element.parse::<i64>()) else {
                continue;
            };
            if !(0..5).contains(&element) {
                continue;
            }
            if let Some(r) = char::from_u32(code) {
                map.insert(r, Element::from_index(element));
                total += 1;
            }
        }
        Ok((Self { map }, total))
    }

    /// Element of a character, `None` when unassigned.
    pub fn query(&self, r: char) -> Option<Element> {
        self.map.get(&r).copied()
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
        let dir = std::env::temp_dir().join("ming_lexicon_fe_test");
        std::fs::create_dir_all(dir.join("list")).unwrap();
        // 22909 = 好; bad lines are skipped.
        std::fs::write(
            dir.join("list").join("CharacterFiveElements.txt"),
            "22909,4\nnot-a-line\n1,9\n",
        )
        .unwrap();
        let (list, total) = FiveElementList::load(&dir).unwrap();
        assert_eq!(total, 1);
        assert_eq!(list.query('好'), Some(Element::Water));
        assert_eq!(list.query('天'), None);
    }
}
