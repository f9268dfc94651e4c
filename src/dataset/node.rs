//! Raw on-disk node representation
//!
//! Every dataset file is an array of the same recursive shape; the depth of
//! nesting is what distinguishes categories from features from exclusions.

use super::DatasetError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One node of a dataset file: a label plus optional children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawNode {
    pub text: String,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

/// Read one dataset file into its node array
///
/// # Errors
///
/// Returns `DatasetError::Read` if the file cannot be opened and
/// `DatasetError::Parse` if its contents are not a JSON node array.
pub fn read_nodes(path: &Path) -> Result<Vec<RawNode>, DatasetError> {
    let file = || path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        file: file(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        file: file(),
        source,
    })
}
