//! Optional `spotlight.toml` configuration.
//!
//! The config file lives in the working directory and is entirely optional:
//! a missing file means defaults, while an unreadable or invalid file is a
//! reported error rather than a silent fallback.
//!
//! ```toml
//! corpus = "corpus.json"
//!
//! [weights]
//! top_limit = 10
//! recent_window_days = 7
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use spotlight_search::Weights;
use thiserror::Error;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "spotlight.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
}

/// Loaded configuration, defaulted where the file is silent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default corpus path, relative to the working directory.
    pub corpus: Option<PathBuf>,
    /// Scoring weight overrides.
    pub weights: Weights,
}

impl Config {
    /// Loads `spotlight.toml` from the given directory.
    ///
    /// Returns defaults when the file does not exist.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::ParseToml { path, source })
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.corpus.is_none());
        assert_eq!(config.weights, Weights::default());
    }

    #[test]
    fn parses_corpus_and_weight_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "corpus = \"data/corpus.json\"\n\n[weights]\ntop_limit = 10\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.corpus.as_deref(), Some(Path::new("data/corpus.json")));
        assert_eq!(config.weights.top_limit, 10);
        // Untouched weights keep their defaults.
        assert_eq!(config.weights.title_exact, 100);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "corpus = [not toml").unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "corpuss = \"x\"\n").unwrap();

        assert!(Config::load(dir.path()).is_err());
    }
}
