//! Error types for dictionary loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from loading the on-disk dictionary files.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LexiconError {
    /// A dictionary file could not be read.
    Io(String),
    /// A dictionary file was read but not understood.
    Parse(String),
}

impl Display for LexiconError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for LexiconError {}

impl From<std::io::Error> for LexiconError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
