//! Dataset loading for seekr
//!
//! A dataset directory holds three JSON documents, each an array of
//! `{ "text": ..., "children": [...] }` nodes:
//!
//! - `categories.json` - three levels deep: category -> genre -> word
//! - `features.json`   - a flat list of feature tags
//! - `exclude.json`    - two levels deep: tag -> optional literal
//!   substitution used verbatim as the query token
//!
//! Loading is all-or-nothing: if any of the three files is missing or fails
//! to parse, the whole load fails and nothing is returned.

mod error;
mod node;

pub use error::DatasetError;
pub use node::RawNode;

use std::path::Path;

/// File name of the category hierarchy within a dataset directory
pub const CATEGORY_FILE: &str = "categories.json";
/// File name of the feature tag list within a dataset directory
pub const FEATURE_FILE: &str = "features.json";
/// File name of the exclusion tags within a dataset directory
pub const EXCLUDE_FILE: &str = "exclude.json";

/// A top-level selectable grouping containing genres
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub genres: Vec<Genre>,
}

/// A second-level grouping containing candidate random words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub name: String,
    pub words: Vec<String>,
}

/// A toggleable exclusion tag
///
/// `substitution` carries the literal query token from the dataset (the
/// datasets include the `-` prefix themselves); without one, the token is
/// derived from the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeTag {
    pub name: String,
    pub substitution: Option<String>,
}

impl ExcludeTag {
    /// The token this tag contributes to the final query
    #[must_use]
    pub fn query_token(&self) -> String {
        self.substitution
            .clone()
            .unwrap_or_else(|| format!("-{}", self.name))
    }
}

/// The three datasets, loaded and validated as one unit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub features: Vec<String>,
    pub excludes: Vec<ExcludeTag>,
}

impl Catalog {
    /// Load a catalog from a dataset directory
    ///
    /// All three files are read and parsed before anything is returned, so
    /// a failure in any of them leaves the caller with no partial catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` naming the offending file if it cannot be
    /// read or does not parse as a node array.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        let categories = node::read_nodes(&dir.join(CATEGORY_FILE))?;
        let features = node::read_nodes(&dir.join(FEATURE_FILE))?;
        let excludes = node::read_nodes(&dir.join(EXCLUDE_FILE))?;

        Ok(Self {
            categories: categories.into_iter().map(Category::from).collect(),
            features: features
                .into_iter()
                .map(|n| n.text.trim().to_string())
                .collect(),
            excludes: excludes.into_iter().map(ExcludeTag::from).collect(),
        })
    }

    /// Look up a category by display name
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Look up an exclusion tag by display name
    #[must_use]
    pub fn exclude(&self, name: &str) -> Option<&ExcludeTag> {
        self.excludes.iter().find(|e| e.name == name)
    }
}

impl Category {
    /// Look up a genre by display name
    #[must_use]
    pub fn genre(&self, name: &str) -> Option<&Genre> {
        self.genres.iter().find(|g| g.name == name)
    }
}

impl From<RawNode> for Category {
    fn from(node: RawNode) -> Self {
        Self {
            name: node.text.trim().to_string(),
            genres: node.children.into_iter().map(Genre::from).collect(),
        }
    }
}

impl From<RawNode> for Genre {
    fn from(node: RawNode) -> Self {
        Self {
            name: node.text.trim().to_string(),
            words: node
                .children
                .into_iter()
                .map(|w| w.text.trim().to_string())
                .collect(),
        }
    }
}

impl From<RawNode> for ExcludeTag {
    fn from(node: RawNode) -> Self {
        Self {
            name: node.text.trim().to_string(),
            substitution: node
                .children
                .into_iter()
                .next()
                .map(|c| c.text.trim().to_string()),
        }
    }
}
