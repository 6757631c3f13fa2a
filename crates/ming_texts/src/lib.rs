//! Localized text tables.
//!
//! Short aliases (stem/branch names, animal signs, fortune ranks, nayin
//! names and the like) are compiled-in const data. Longer prose
//! (fortune-rule details, ten-god descriptions) is loaded from per-language
//! message files at startup by [`MessageStore`].
//!
//! Lookup semantics are deliberately forgiving: an out-of-range index yields
//! an empty string and an unknown language falls back to the default, so
//! callers never have to handle text errors.

pub mod aliases;
pub mod language;
pub mod messages;

pub use aliases::{Alias, alias};
pub use language::Language;
pub use messages::{Message, MessageStore};
