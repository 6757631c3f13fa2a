//! Output language selection.

use serde::{Deserialize, Serialize};

/// Report language. Simplified Chinese is the process-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Simplified,
    Traditional,
    English,
}

impl Language {
    /// Row index into per-language tables.
    pub fn index(self) -> usize {
        match self {
            Language::Simplified => 0,
            Language::Traditional => 1,
            Language::English => 2,
        }
    }

    /// Parse a request language code; unknown codes fall back to the default.
    pub fn parse(code: &str) -> Language {
        match code.to_ascii_lowercase().as_str() {
            "0" | "s" | "simplified" => Language::Simplified,
            "1" | "t" | "traditional" => Language::Traditional,
            "2" | "e" | "english" => Language::English,
            _ => Language::default(),
        }
    }

    /// Suffix used by on-disk message files (`<Name>S.txt` etc.).
    pub fn file_suffix(self) -> &'static str {
        match self {
            Language::Simplified => "S",
            Language::Traditional => "T",
            Language::English => "E",
        }
    }
}
