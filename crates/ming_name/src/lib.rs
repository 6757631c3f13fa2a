//! Chinese-name numerology: stroke grids, eight characters, and ranking.
//!
//! The entry point is [`rank::rank`], which screens a [`Name`] for
//! sensitive homophones, builds the birth [`Calendar`], and derives the
//! stroke-grid [`FiveRules`] report, the [`EightCharacters`] strength
//! analysis, ganzhi element tallies, nayin sounds, zodiac radical advice,
//! dictionary and poetry citations, and a weighted composite score.
//!
//! All scoring tables live in [`rules`]; they are fixed data, not
//! configuration.

pub mod animal;
pub mod eight_characters;
pub mod five_rules;
pub mod name;
pub mod rank;
pub mod rules;
pub mod sounds;
pub mod ten_gods;

pub use animal::{AnimalRadicals, RadicalsMeaning, animal_radicals};
pub use eight_characters::EightCharacters;
pub use five_rules::FiveRules;
pub use name::{Name, NameDef, NameSpec};
pub use rank::{RankData, RankSummary, rank};
pub use rules::{Rule81, ThreeElement, rule81, rule81_index, three_element};
pub use sounds::{SoundFiveElement, SoundFiveElements};
pub use ten_gods::{TenGod, ten_god};
