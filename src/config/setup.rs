//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when seekr is run for the first time.

use super::SeekrConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for the dataset directory
///
/// Guides the user through creating their initial configuration:
/// 1. Prompts for the dataset directory (default: `data/` under the
///    current directory, where the bundled samples live)
/// 2. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<SeekrConfig, ConfigError> {
    println!("Welcome to seekr! Let's point it at a dataset directory.\n");

    let default_dir = std::env::current_dir()
        .map(|cwd| cwd.join("data"))
        .map_err(|e| ConfigError::Message(format!("Could not determine current directory: {e}")))?;

    let dir_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Dataset directory (categories.json, features.json, exclude.json)")
        .default(default_dir.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = SeekrConfig::default();
    config.dataset_dir = Some(PathBuf::from(dir_str));
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
