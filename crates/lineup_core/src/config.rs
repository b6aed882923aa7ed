//! Board configuration
//!
//! Tunables for the interaction rules, loadable from YAML or JSON. Presets:
//!
//! ```rust
//! use lineup_core::config::BoardConfig;
//!
//! let config = BoardConfig::default();
//! let strict = BoardConfig::strict();
//! assert!(strict.clamp_drop_coordinates);
//! ```

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "LINEUP_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Clamp drop coordinates into 0..=100 instead of storing them verbatim.
    pub clamp_drop_coordinates: bool,
    /// After a conflict is resolved, retry placing the incoming player at
    /// its original drop point.
    pub auto_place_after_resolution: bool,
    pub min_jersey_number: u8,
    pub max_jersey_number: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            clamp_drop_coordinates: false,
            auto_place_after_resolution: false,
            min_jersey_number: 1,
            max_jersey_number: 99,
        }
    }
}

impl BoardConfig {
    /// Keeps every stored coordinate on the field.
    pub fn strict() -> Self {
        Self { clamp_drop_coordinates: true, ..Self::default() }
    }

    /// Resolving a number conflict also completes the interrupted drop.
    pub fn assisted() -> Self {
        Self { clamp_drop_coordinates: true, auto_place_after_resolution: true, ..Self::default() }
    }

    pub fn jersey_numbers(&self) -> RangeInclusive<u8> {
        self.min_jersey_number..=self.max_jersey_number
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_jersey_number == 0 {
            return Err(ConfigError::Invalid("min_jersey_number must be at least 1".to_string()));
        }
        if self.min_jersey_number > self.max_jersey_number {
            return Err(ConfigError::Invalid(format!(
                "min_jersey_number ({}) exceeds max_jersey_number ({})",
                self.min_jersey_number, self.max_jersey_number
            )));
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Load from the file named by `LINEUP_CONFIG_PATH`, if set.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(None);
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }
        Self::from_path(Path::new(path)).map(Some)
    }
}
