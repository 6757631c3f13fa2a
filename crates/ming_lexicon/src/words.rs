//! Pinyin-keyed word lists: common homonyms and screened words.
//!
//! Both files share one format: `pinyin:word1;word2`. The pinyin key for a
//! multi-character word is the per-character pinyin joined with ",".

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LexiconError;

#[derive(Debug, Default)]
pub struct WordList {
    map: HashMap<String, Vec<String>>,
}

impl WordList {
    pub fn empty() -> Self {
        Self::default()
    }

    fn load_file(path: &Path) -> Result<(Self, usize), LexiconError> {
        let content = fs::read_to_string(path)
            .map_err(|e| LexiconError::Io(format!("read <{}>: {e}", path.display())))?;
        let mut map = HashMap::new();
        let mut total = 0usize;
        for line in content.lines() {
            let Some((pinyin, words)) = line.split_once(':') else {
                continue;
            };
            map.insert(
                pinyin.to_owned(),
                words.split(';').map(str::to_owned).collect(),
            );
            total += 1;
        }
        Ok((Self { map }, total))
    }

    /// `list/CommonWords.txt`.
    pub fn load_common(dir: &Path) -> Result<(Self, usize), LexiconError> {
        Self::load_file(&dir.join("list").join("CommonWords.txt"))
    }

    /// `list/SensitiveWords.txt`.
    pub fn load_sensitive(dir: &Path) -> Result<(Self, usize), LexiconError> {
        Self::load_file(&dir.join("list").join("SensitiveWords.txt"))
    }

    pub fn query(&self, pinyin: &str) -> Option<&[String]> {
        self.map.get(pinyin).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
