//! Process configuration: data directory and default report language.
//!
//! Settings come from an optional TOML file, overridden by the
//! `MING_DATA_DIR` and `MING_LANGUAGE` environment variables. Every
//! setting has a default, so a bare process works against `./data`.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use ming_texts::Language;

pub const ENV_DATA_DIR: &str = "MING_DATA_DIR";
pub const ENV_LANGUAGE: &str = "MING_LANGUAGE";

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "config io error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    language: Option<String>,
}

/// Resolved settings, ready to hand to the loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("data"),
            language: Language::default(),
        }
    }
}

impl Config {
    /// Reads `path` and applies environment overrides on top.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("read <{}>: {e}", path.display())))?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut config = Config::default();
        if let Some(dir) = file.data_dir {
            config.data_dir = dir;
        }
        if let Some(code) = file.language {
            config.language = Language::parse(&code);
        }
        config.apply_env();
        Ok(config)
    }

    /// Defaults plus environment overrides, with no file involved.
    pub fn from_env() -> Config {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(code) = std::env::var(ENV_LANGUAGE) {
            self.language = Language::parse(&code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.language, Language::Simplified);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = std::env::temp_dir().join("ming_config_file_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ming.toml");
        std::fs::write(&path, "data_dir = \"/srv/ming\"\nlanguage = \"traditional\"\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/ming"));
        assert_eq!(config.language, Language::Traditional);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = std::env::temp_dir().join("ming_config_partial_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ming.toml");
        std::fs::write(&path, "language = \"english\"\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let dir = std::env::temp_dir().join("ming_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ming.toml");
        std::fs::write(&path, "data_dir = [not toml\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("ming_config_absent").join("ming.toml");
        assert!(matches!(Config::from_file(&path), Err(ConfigError::Io(_))));
    }
}
