//! Read-only dictionary services for name analysis.
//!
//! A [`Lexicon`] aggregates every on-disk dataset the analyzers consult:
//! the Unihan character store, per-character five-element assignments, the
//! surname registry, common and screened word lists, the Xinhua dictionary,
//! and the poetry corpus. Loading happens once at startup; afterwards all
//! queries are immutable borrows, so a `Lexicon` can be shared freely.

pub mod character;
pub mod error;
pub mod five_elements_list;
pub mod poetry;
pub mod surnames;
pub mod words;
pub mod xinhua;

use std::path::Path;

use tracing::info;

pub use character::{CharacterStore, HanCharacter, RsCount};
pub use error::LexiconError;
pub use five_elements_list::FiveElementList;
pub use poetry::{Poetry, PoetryCorpus, PoetryKind};
pub use surnames::{Surname, SurnameRegistry};
pub use words::WordList;
pub use xinhua::{XinhuaDict, XinhuaEntry};

/// All dictionaries, loaded together.
#[derive(Debug, Default)]
pub struct Lexicon {
    pub characters: CharacterStore,
    pub five_elements: FiveElementList,
    pub surnames: SurnameRegistry,
    pub common_words: WordList,
    pub sensitive_words: WordList,
    pub xinhua: XinhuaDict,
    pub poetry: PoetryCorpus,
}

impl Lexicon {
    /// A lexicon with no data. Queries all come back empty; useful for
    /// calendar-only work and tests.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads every dataset under `dir`. Any missing or unreadable file
    /// fails the whole load.
    pub fn load(dir: &Path) -> Result<Self, LexiconError> {
        let (characters, lines) = CharacterStore::load(dir)?;
        info!(lines, characters = characters.len(), "loaded unihan libraries");

        let (five_elements, lines) = FiveElementList::load(dir)?;
        info!(lines, "loaded character five elements");

        let (surnames, lines) = SurnameRegistry::load(dir)?;
        info!(lines, "loaded surname registry");

        let (common_words, lines) = WordList::load_common(dir)?;
        info!(lines, "loaded common words");

        let (sensitive_words, lines) = WordList::load_sensitive(dir)?;
        info!(lines, "loaded sensitive words");

        let (xinhua, lines) = XinhuaDict::load(dir)?;
        info!(lines, "loaded xinhua dictionary");

        let (poetry, poems, words) = PoetryCorpus::load(dir)?;
        info!(poems, words, "loaded poetry corpus");

        Ok(Lexicon {
            characters,
            five_elements,
            surnames,
            common_words,
            sensitive_words,
            xinhua,
            poetry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lexicon_answers_nothing() {
        let lex = Lexicon::empty();
        assert!(lex.characters.get('好').is_none());
        assert!(lex.five_elements.query('好').is_none());
        assert!(lex.surnames.query("赵").is_none());
        assert!(lex.common_words.query("hao").is_none());
        assert!(lex.xinhua.query('好').is_none());
        assert!(lex.poetry.query("明月").is_empty());
    }

    #[test]
    fn load_requires_every_file() {
        let dir = std::env::temp_dir().join("ming_lexicon_missing_test");
        std::fs::create_dir_all(&dir).unwrap();
        assert!(Lexicon::load(&dir).is_err());
    }
}
