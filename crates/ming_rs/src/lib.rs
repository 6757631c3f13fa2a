//! Convenience wrapper for the ming name-analysis engine.
//!
//! A [`Ming`] owns every loaded dictionary plus the solar-term provider and
//! exposes the two high-level entry points: [`Ming::calendar`] for pure
//! calendar conversion and [`Ming::rank`] for the full name report.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ming_base::Location;
//! use ming_config::Config;
//! use ming_rs::Ming;
//! use ming_texts::Language;
//!
//! let ming = Ming::new(Config::from_env()).expect("load dictionaries");
//! let report = ming.rank(
//!     Language::Simplified,
//!     "李", "", "明",
//!     946_684_800,
//!     Location { latitude: 31.23, longitude: 121.47 },
//! );
//! println!("{}", report.rank.rank_total);
//! ```

use std::error::Error;
use std::fmt;

use tracing::info;

use ming_base::Location;
use ming_calendar::{ApproxSolarTerms, Calendar};
use ming_config::{Config, ConfigError};
use ming_lexicon::{Lexicon, LexiconError};
use ming_name::{Name, RankData};
use ming_texts::{Language, MessageStore};

pub use ming_base::{Element, GanzhiPair};
pub use ming_calendar::{GanzhiReport, LunarReport, SolarReport, TimeSpec};
pub use ming_name::{EightCharacters, FiveRules};

#[derive(Debug)]
#[non_exhaustive]
pub enum MingError {
    Lexicon(LexiconError),
    Config(ConfigError),
    Json(String),
}

impl fmt::Display for MingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MingError::Lexicon(e) => write!(f, "lexicon error: {e}"),
            MingError::Config(e) => write!(f, "config error: {e}"),
            MingError::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl Error for MingError {}

impl From<LexiconError> for MingError {
    fn from(e: LexiconError) -> Self {
        MingError::Lexicon(e)
    }
}

impl From<ConfigError> for MingError {
    fn from(e: ConfigError) -> Self {
        MingError::Config(e)
    }
}

/// Loaded engine: dictionaries, message texts, and the term provider.
pub struct Ming {
    config: Config,
    lexicon: Lexicon,
    messages: MessageStore,
    terms: ApproxSolarTerms,
}

impl Ming {
    /// Loads every dictionary and message table under `config.data_dir`.
    pub fn new(config: Config) -> Result<Ming, MingError> {
        let lexicon = Lexicon::load(&config.data_dir)?;
        let (messages, lines) = MessageStore::load(&config.data_dir);
        info!(lines, dir = %config.data_dir.display(), "loaded message texts");
        Ok(Ming {
            config,
            lexicon,
            messages,
            terms: ApproxSolarTerms,
        })
    }

    /// An engine with no dictionary data. Calendar conversion still works
    /// in full; name reports come back without dictionary annotations.
    pub fn empty() -> Ming {
        Ming {
            config: Config::default(),
            lexicon: Lexicon::empty(),
            messages: MessageStore::empty(),
            terms: ApproxSolarTerms,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Calendar report for a Unix timestamp at a location, localized.
    pub fn calendar(
        &self,
        timestamp: i64,
        location: Location,
        language: Language,
    ) -> Calendar {
        let mut calendar = Calendar::new(timestamp, location, &self.terms);
        calendar.localize(language);
        calendar
    }

    /// Full name report for a birth instant at a location.
    pub fn rank(
        &self,
        language: Language,
        family_name: &str,
        middle_name: &str,
        given_name: &str,
        birth_time: i64,
        location: Location,
    ) -> RankData {
        let name = Name::new(family_name, middle_name, given_name, &self.lexicon);
        ming_name::rank(
            language,
            name,
            birth_time,
            location,
            &self.lexicon,
            &self.messages,
            &self.terms,
        )
    }

    /// [`Ming::rank`] serialized as a JSON document.
    pub fn rank_json(
        &self,
        language: Language,
        family_name: &str,
        middle_name: &str,
        given_name: &str,
        birth_time: i64,
        location: Location,
    ) -> Result<String, MingError> {
        let data = self.rank(
            language,
            family_name,
            middle_name,
            given_name,
            birth_time,
            location,
        );
        serde_json::to_string_pretty(&data).map_err(|e| MingError::Json(e.to_string()))
    }

    /// [`Ming::calendar`] serialized as a JSON document.
    pub fn calendar_json(
        &self,
        timestamp: i64,
        location: Location,
        language: Language,
    ) -> Result<String, MingError> {
        let calendar = self.calendar(timestamp, location, language);
        serde_json::to_string_pretty(&calendar).map_err(|e| MingError::Json(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHANGHAI: Location = Location {
        latitude: 31.2304,
        longitude: 121.4737,
    };

    #[test]
    fn empty_engine_converts_calendars() {
        let ming = Ming::empty();
        let c = ming.calendar(946_684_800, SHANGHAI, Language::Simplified);
        assert_eq!(c.solar.year, 2000);
        assert_eq!(c.lunar.year, 1999);
        assert_eq!((c.ganzhi.year.stem, c.ganzhi.year.branch), (5, 7));
    }

    #[test]
    fn empty_engine_ranks_without_annotations() {
        let ming = Ming::empty();
        let data = ming.rank(
            Language::Simplified,
            "李",
            "",
            "明",
            946_684_800,
            SHANGHAI,
        );
        // Unknown characters drop out, so the grids stay at zero, but the
        // calendar side of the report is complete.
        assert!(!data.illegal);
        assert_eq!(data.calendar.solar.year, 2000);
        assert!(data.dict_xinhua.given_name_xinhua.is_empty());
    }

    #[test]
    fn rank_json_is_a_document() {
        let ming = Ming::empty();
        let json = ming
            .rank_json(Language::Simplified, "李", "", "明", 946_684_800, SHANGHAI)
            .unwrap();
        assert!(json.contains("\"rank_total\""));
        assert!(json.contains("\"illegal\""));
    }
}
