//! Scorer configuration
//!
//! Loaded from a JSON file named by `CRIC_CONFIG_PATH`, falling back to
//! defaults when the variable is unset or blank.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{env, fs};
use thiserror::Error;

use crate::save::SnapshotFormat;
use crate::DEFAULT_STORAGE_KEY;

pub const CONFIG_PATH_ENV: &str = "CRIC_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file from CRIC_CONFIG_PATH='{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScorerConfig {
    /// Slot the active match is persisted under.
    pub storage_key: String,
    /// Snapshot encoding.
    pub format: SnapshotFormat,
    /// Directory for the file-backed store.
    pub save_dir: PathBuf,
    /// Reject malformed run entries instead of coercing them to 0.
    pub strict_runs: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            format: SnapshotFormat::Json,
            save_dir: PathBuf::from("saves"),
            strict_runs: false,
        }
    }
}

impl ScorerConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.storage_key.as_str();
        if key.is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".to_string()));
        }
        if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(ConfigError::Invalid(format!(
                "storage_key '{key}' may only contain ASCII letters, digits, '_' and '-'"
            )));
        }
        if self.save_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("save_dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Defaults, overridden by the JSON file named in `CRIC_CONFIG_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_string(), source })?;

        let config = Self::from_json(&content)?;
        config.validate()?;
        Ok(config)
    }
}
