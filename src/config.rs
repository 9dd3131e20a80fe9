//! TOML configuration for the renderer and the adapter-side token cap
//!
//! ```toml
//! max_tokens = 5000
//! substitution = "diagonal"
//! filler_words = ["really", "actually"]
//!
//! [styles]
//! replaced = "background:#ff4757"
//! ```
//!
//! Every key is optional.

use crate::diff::SubstitutionPolicy;
use crate::engine::EngineOptions;
use crate::filler::FillerSet;
use crate::render::StyleSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Reject inputs with more tokens than this
    pub max_tokens: Option<usize>,
    /// Replaces the built-in filler vocabulary when set
    pub filler_words: Option<Vec<String>>,
    pub substitution: SubstitutionPolicy,
    pub styles: StyleSet,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn filler_set(&self) -> FillerSet {
        match &self.filler_words {
            Some(words) => FillerSet::from_words(words),
            None => FillerSet::default(),
        }
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            filler: self.filler_set(),
            styles: self.styles.clone(),
            policy: self.substitution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.engine_options(), EngineOptions::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
            max_tokens = 200
            substitution = "legacy"
            filler_words = ["Kinda", "sorta"]

            [styles]
            filler = "color:orange"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_tokens, Some(200));
        assert_eq!(config.substitution, SubstitutionPolicy::Legacy);
        assert!(config.filler_set().contains("kinda"));
        assert!(!config.filler_set().contains("really"));
        assert_eq!(config.styles.filler, "color:orange");
        // unset style keys keep their defaults
        assert_eq!(config.styles.replaced, StyleSet::default().replaced);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bad_policy_rejected() {
        assert!(Config::from_toml_str("substitution = \"sometimes\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewrite-diff.toml");
        fs::write(&path, "max_tokens = 10\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.max_tokens, Some(10));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/rewrite-diff.toml").unwrap_err();

        match err {
            ConfigError::Io { path, .. } => assert!(path.contains("nonexistent")),
            other => panic!("Expected ConfigError::Io, got {other:?}"),
        }
    }
}
