//! Dataset error types

use thiserror::Error;

/// Errors raised while loading a dataset directory
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A dataset file could not be read
    #[error("Failed to read dataset file '{file}': {source}")]
    Read {
        file: String,
        source: std::io::Error,
    },

    /// A dataset file was read but is not a valid node array
    #[error("Failed to parse dataset file '{file}': {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },
}
