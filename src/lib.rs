//! Seekr - a search-query builder with a gacha streak
//!
//! This library assembles video-search queries from static datasets: pick a
//! category and genre, toggle feature and exclusion tags, roll a random
//! "popular word" and an optional noise token, then hand the finished query
//! to a search engine.

use thiserror::Error;

pub mod builder;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod output;
pub mod search;
pub mod session;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SeekrError {
    /// Dataset loading or parsing error
    #[error("Dataset error: {0}")]
    Dataset(#[from] dataset::DatasetError),
    /// Query building error
    #[error("Builder error: {0}")]
    Builder(#[from] builder::BuilderError),
    /// Session error
    #[error("Session error: {0}")]
    Session(#[from] session::SessionError),
    /// Search dispatch error
    #[error("Search error: {0}")]
    Search(#[from] search::SearchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Interactive UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
