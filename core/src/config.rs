//! config.rs
//! Engine configuration.
//!
//! Design notes:
//! - Every field has a default, so `{}` is a valid config document.
//! - Payload logging is a separate, explicit opt-in: with it enabled and the
//!   debug switch on, raw caller data is written to the log.
//! - Dictionaries listed here are loaded by `Engine::from_config`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COMPRESSION_LEVEL, DEFAULT_DICTIONARY_CAPACITY};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Zstandard level for one-shot compression and dictionary encode handles.
    pub compression_level: i32,
    /// Maximum number of registered dictionaries.
    pub dictionary_capacity: usize,
    pub log: LogConfig,
    pub dictionaries: Vec<DictionarySource>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            dictionary_capacity: DEFAULT_DICTIONARY_CAPACITY,
            log: LogConfig::default(),
            dictionaries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Initial state of the per-call debug switch.
    pub debug: bool,
    /// Also log payload contents while debug is on. Leaks caller data.
    pub log_payloads: bool,
}

/// A base64 dictionary file to register under `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySource {
    pub name: String,
    pub path: PathBuf,
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (zstd_safe::min_c_level(), zstd_safe::max_c_level());
        if !(min..=max).contains(&self.compression_level) {
            return Err(ConfigError::Invalid(format!(
                "compression_level {} outside {}..={}",
                self.compression_level, min, max
            )));
        }
        if self.dictionary_capacity == 0 {
            return Err(ConfigError::Invalid("dictionary_capacity must be at least 1".into()));
        }
        if self.dictionaries.len() > self.dictionary_capacity {
            return Err(ConfigError::Invalid(format!(
                "{} dictionaries configured but capacity is {}",
                self.dictionaries.len(),
                self.dictionary_capacity
            )));
        }
        for (i, source) in self.dictionaries.iter().enumerate() {
            if source.name.is_empty() {
                return Err(ConfigError::Invalid(format!("dictionaries[{i}] has an empty name")));
            }
            if self.dictionaries[..i].iter().any(|s| s.name == source.name) {
                return Err(ConfigError::Invalid(format!("dictionary {:?} listed twice", source.name)));
            }
        }
        Ok(())
    }

    /// Builder-style toggle for the debug switch's initial state.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.log.debug = debug;
        self
    }
}
