//! Poetry corpus with a word-to-poem citation index.
//!
//! `poetry/PoetriesS.txt` holds `Kind$Author$Title$Paragraphs` lines;
//! `poetry/PoetryWordsS.txt` holds `word$tag|tag` lines whose tags index
//! into the poem list in file order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::LexiconError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoetryKind {
    ShiJing,
    ChuCi,
    FourBooks,
    ZhouYi,
    Flower,
    SouthTang,
    Tang,
    Song,
    SongCi,
}

impl PoetryKind {
    fn parse(tag: &str) -> Option<PoetryKind> {
        match tag {
            "ShiJing" => Some(PoetryKind::ShiJing),
            "ChuCi" => Some(PoetryKind::ChuCi),
            "4.Books" => Some(PoetryKind::FourBooks),
            "ZhouYi" => Some(PoetryKind::ZhouYi),
            "Flower" => Some(PoetryKind::Flower),
            "SouthTang.Poet" => Some(PoetryKind::SouthTang),
            "Tang.Poet" => Some(PoetryKind::Tang),
            "Song.Poet" => Some(PoetryKind::Song),
            "Song.Ci" => Some(PoetryKind::SongCi),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Poetry {
    pub kind: Option<PoetryKind>,
    pub author: String,
    pub title: String,
    pub paragraphs: String,
}

#[derive(Debug, Default)]
pub struct PoetryCorpus {
    poetries: Vec<Poetry>,
    words: HashMap<String, Vec<usize>>,
}

impl PoetryCorpus {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads both corpus files. Returns the corpus plus poem and word
    /// counts.
    pub fn load(dir: &Path) -> Result<(Self, usize, usize), LexiconError> {
        let path = dir.join("poetry").join("PoetriesS.txt");
        let content = fs::read_to_string(&path)
            .map_err(|e| LexiconError::Io(format!("read <{}>: {e}", path.display())))?;
        let mut poetries = Vec::new();
        for line in content.lines() {
            let parts: Vec<&str> = line.split('$').collect();
            if parts.len() != 4 {
                continue;
            }
            poetries.push(Poetry {
                kind: PoetryKind::parse(parts[0]),
                author: parts[1].to_owned(),
                title: parts[2].to_owned(),
                paragraphs: parts[3].to_owned(),
            });
        }

        let path = dir.join("poetry").join("PoetryWordsS.txt");
        let content = fs::read_to_string(&path)
            .map_err(|e| LexiconError::Io(format!("read <{}>: {e}", path.display())))?;
        let mut words: HashMap<String, Vec<usize>> = HashMap::new();
        let mut total_words = 0usize;
        for line in content.lines() {
            let Some((word, tags)) = line.split_once('$') else {
                continue;
            };
            for tag in tags.split('|') {
                if let Ok(tag) = tag.parse::<usize>() {
                    words.entry(word.to_owned()).or_default().push(tag);
                }
            }
            total_words += 1;
        }

        let total_poetries = poetries.len();
        Ok((Self { poetries, words }, total_poetries, total_words))
    }

    /// Poems citing `word`, in index order. Stale tags are skipped.
    pub fn query(&self, word: &str) -> Vec<&Poetry> {
        let Some(tags) = self.words.get(word) else {
            return Vec::new();
        };
        tags.iter()
            .filter_map(|&tag| self.poetries.get(tag))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.poetries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poetries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_cites() {
        let dir = std::env::temp_dir().join("ming_lexicon_poetry_test");
        std::fs::create_dir_all(dir.join("poetry")).unwrap();
        std::fs::write(
            dir.join("poetry").join("PoetriesS.txt"),
            "ShiJing$佚名$关雎$关关雎鸠，在河之洲。\nTang.Poet$李白$静夜思$床前明月光。\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("poetry").join("PoetryWordsS.txt"),
            "明月$1\n河洲$0|1\n幽兰$99\n",
        )
        .unwrap();
        let (corpus, poems, words) = PoetryCorpus::load(&dir).unwrap();
        assert_eq!((poems, words), (2, 3));
        let hits = corpus.query("明月");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, Some(PoetryKind::Tang));
        assert_eq!(corpus.query("河洲").len(), 2);
        // Tags past the end of the poem list are dropped.
        assert!(corpus.query("幽兰").is_empty());
        assert!(corpus.query("未知").is_empty());
    }
}
