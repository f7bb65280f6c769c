//! Configuration module for xtag
//!
//! Manages application configuration: default quietness, the paths used
//! when a command is given none, and the legacy tag-format override.
//! Configuration is stored in the user's config directory.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct XtagConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Paths used when a command is invoked without any
    #[serde(default = "default_paths")]
    pub default_paths: Vec<PathBuf>,

    /// Write tags in the format used by pre-0.2 releases
    #[serde(default)]
    pub legacy_format: bool,
}

fn default_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

impl Default for XtagConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            default_paths: default_paths(),
            legacy_format: false,
        }
    }
}

impl XtagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("xtag").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
