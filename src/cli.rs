//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for seekr using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive query builder (default)
//! - **build**: Assemble a query from flags without entering the TUI
//! - **list**: Print the loaded catalog
//! - **config**: Get or set persistent settings
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--data-dir` override for the dataset directory
//! - Command aliases (e.g., `b` for `build`, `l` for `list`)

use crate::search::SearchEngine;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Seekr - roll a genre, pick your tags, launch the search
#[derive(Parser, Debug)]
#[command(name = "seekr", version, about)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding categories.json, features.json and exclude.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive query builder (default command)
    Browse,

    /// Assemble a query from flags and print it
    #[command(visible_alias = "b")]
    Build {
        /// Category to select
        #[arg(short, long)]
        category: Option<String>,

        /// Genre to select (requires --category); triggers the random draw
        #[arg(short, long)]
        genre: Option<String>,

        /// Feature tags to add (repeatable, comma-separated values allowed)
        #[arg(short, long = "feature", value_name = "TAG")]
        features: Vec<String>,

        /// Exclusion tags to add (repeatable; catalog tags use their
        /// substitution, everything else becomes a "-" token)
        #[arg(short = 'x', long = "exclude", value_name = "TAG")]
        excludes: Vec<String>,

        /// Append a random 3-symbol noise token
        #[arg(long)]
        noise: bool,

        /// Skip the random popular-word draw
        #[arg(long)]
        no_random_word: bool,

        /// Search engine to target
        #[arg(short, long, value_enum)]
        engine: Option<SearchEngine>,

        /// Open the query in the system browser instead of only printing it
        #[arg(long)]
        open: bool,
    },

    /// Print the catalog: categories, genres, features and excludes
    #[command(visible_alias = "l")]
    List {
        /// Also list every genre's word pool
        #[arg(long)]
        words: bool,
    },

    /// Manage application settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value (key=value format)
    Set {
        /// Setting in key=value format (keys: dataset_dir, engine, quiet,
        /// no_random_word)
        setting: String,
    },
    /// Get a configuration value
    Get {
        /// Setting key to retrieve
        key: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}
