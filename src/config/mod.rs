//! Configuration module for seekr
//!
//! Manages application configuration including the dataset directory and
//! search defaults. Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use crate::search::SearchEngine;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SeekrConfig {
    /// Directory holding the three dataset files
    #[serde(default)]
    pub dataset_dir: Option<PathBuf>,

    /// Engine used when none is specified on the command line
    #[serde(default)]
    pub engine: SearchEngine,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Start sessions with the no-random-word toggle active
    #[serde(default)]
    pub no_random_word: bool,
}

impl SeekrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("seekr").join("config.toml"))
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
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the dataset directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn set_dataset_dir(&mut self, dir: PathBuf) -> Result<(), ConfigError> {
        self.dataset_dir = Some(dir);
        self.save()
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeekrConfig::default();
        assert!(config.dataset_dir.is_none());
        assert_eq!(config.engine, SearchEngine::VideoSearch);
        assert!(!config.quiet);
        assert!(!config.no_random_word);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = SeekrConfig {
            dataset_dir: Some(PathBuf::from("/tmp/seekr-data")),
            engine: SearchEngine::Youtube,
            quiet: true,
            no_random_word: true,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: SeekrConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.dataset_dir, config.dataset_dir);
        assert_eq!(parsed.engine, SearchEngine::Youtube);
        assert!(parsed.quiet);
        assert!(parsed.no_random_word);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: SeekrConfig = toml::from_str("quiet = true\n").unwrap();
        assert!(parsed.quiet);
        assert!(parsed.dataset_dir.is_none());
        assert_eq!(parsed.engine, SearchEngine::VideoSearch);
    }

    #[test]
    fn test_engine_serializes_lowercase() {
        let config = SeekrConfig {
            engine: SearchEngine::Youtube,
            ..Default::default()
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        assert!(serialized.contains("engine = \"youtube\""));
    }
}
