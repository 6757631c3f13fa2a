//! Long-form localized messages, loaded from plain-text files.
//!
//! Each message category is a file family `message/<Name><S|T|E>.txt` under
//! the data directory, one entry per line. Missing files are tolerated; the
//! store simply answers `""` for that language.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::language::Language;

/// Message category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FiveRuleDescription,
    FiveRuleSummary,
    StemDescription,
    SoundFiveElementDescription,
    TenGodDescription,
    TenGodSoul,
    ThreeElementDescription,
    AnimalYear,
    AnimalRadicalsDescription,
}

impl Message {
    const ALL: [Message; 9] = [
        Message::FiveRuleDescription,
        Message::FiveRuleSummary,
        Message::StemDescription,
        Message::SoundFiveElementDescription,
        Message::TenGodDescription,
        Message::TenGodSoul,
        Message::ThreeElementDescription,
        Message::AnimalYear,
        Message::AnimalRadicalsDescription,
    ];

    fn file_stem(self) -> &'static str {
        match self {
            Message::FiveRuleDescription => "FiveRuleDescriptions",
            Message::FiveRuleSummary => "FiveRuleSummaries",
            Message::StemDescription => "GanDescriptions",
            Message::SoundFiveElementDescription => "SoundFiveElementDescriptions",
            Message::TenGodDescription => "TenGodDescriptions",
            Message::TenGodSoul => "TenGodSouls",
            Message::ThreeElementDescription => "ThreeElementDescriptions",
            Message::AnimalYear => "AnimalYears",
            Message::AnimalRadicalsDescription => "AnimalRadicalsDescriptions",
        }
    }

    fn table_index(self) -> usize {
        Self::ALL.iter().position(|&m| m == self).unwrap_or(0)
    }
}

const LANGUAGES: [Language; 3] = [Language::Simplified, Language::Traditional, Language::English];

/// All message categories for all languages. Construct once at startup and
/// share read-only.
#[derive(Debug, Default)]
pub struct MessageStore {
    // tables[category][language] -> lines
    tables: Vec<Vec<Vec<String>>>,
}

impl MessageStore {
    /// An empty store: every lookup answers `""`. Used in tests and when no
    /// data directory is configured.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every message family under `dir/message/`. Missing files load as
    /// empty language rows. Returns the total number of lines read.
    pub fn load(dir: &Path) -> (Self, usize) {
        let mut tables = Vec::with_capacity(Message::ALL.len());
        let mut total = 0usize;
        for message in Message::ALL {
            let mut rows = Vec::with_capacity(LANGUAGES.len());
            for language in LANGUAGES {
                let path = dir
                    .join("message")
                    .join(format!("{}{}.txt", message.file_stem(), language.file_suffix()));
                let lines = read_lines(&path);
                total += lines.len();
                rows.push(lines);
            }
            tables.push(rows);
        }
        debug!(total, "loaded message tables");
        (Self { tables }, total)
    }

    /// Message text; `""` for out-of-range indices or unloaded categories.
    /// Languages without data fall back to the default language row.
    pub fn get(&self, message: Message, index: i64, language: Language) -> &str {
        let Some(rows) = self.tables.get(message.table_index()) else {
            return "";
        };
        let row = match rows.get(language.index()) {
            Some(row) if !row.is_empty() => row,
            _ => match rows.get(Language::default().index()) {
                Some(row) => row,
                None => return "",
            },
        };
        if index < 0 {
            return "";
        }
        row.get(index as usize).map(String::as_str).unwrap_or("")
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    let Ok(file) = File::open(path) else {
        return Vec::new();
    };
    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_store_answers_empty() {
        let store = MessageStore::empty();
        assert_eq!(store.get(Message::FiveRuleSummary, 1, Language::Simplified), "");
        assert_eq!(store.get(Message::AnimalYear, -1, Language::English), "");
    }

    #[test]
    fn loads_files_and_falls_back() {
        let dir = std::env::temp_dir().join("ming_texts_msg_test");
        let msg = dir.join("message");
        fs::create_dir_all(&msg).unwrap();
        fs::write(msg.join("AnimalYearsS.txt"), "rat years\nox years\n").unwrap();
        let (store, total) = MessageStore::load(&dir);
        assert_eq!(total, 2);
        assert_eq!(store.get(Message::AnimalYear, 0, Language::Simplified), "rat years");
        assert_eq!(store.get(Message::AnimalYear, 1, Language::Simplified), "ox years");
        // English file was absent: simplified row answers instead.
        assert_eq!(store.get(Message::AnimalYear, 1, Language::English), "ox years");
        // Out of range degrades.
        assert_eq!(store.get(Message::AnimalYear, 2, Language::Simplified), "");
        fs::remove_dir_all(&dir).ok();
    }
}
