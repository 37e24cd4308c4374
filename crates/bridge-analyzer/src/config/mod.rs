//! Configuration management for the analyzer.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults for every missing section or field.

mod types;
mod validate;

pub use types::*;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame transform stages
    pub preprocess: PreprocessConfig,

    /// Model input normalisation
    pub tensor: TensorConfig,

    /// Resource limits
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!(
            path = %path.display(),
            stages = config.preprocess.stages.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.bridge-analyzer.bridge-analyzer/config.toml
    /// - Linux: ~/.config/bridge-analyzer/config.toml
    ///
    /// Falls back to ~/.bridge-analyzer/config.toml if directory detection
    /// fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "bridge-analyzer", "bridge-analyzer")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home)
                    .join(".bridge-analyzer")
                    .join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
