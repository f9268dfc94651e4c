//! Mutable selection state
//!
//! One instance lives for the whole session. Category and genre are
//! single-select; features and exclusions are independently toggleable
//! multi-selects. The exclude display list and the exclude query tokens are
//! kept in lock-step: every display entry has exactly one token at the same
//! position.

/// Current selections across all option groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Selected category name, if any
    pub category: Option<String>,

    /// Selected genre name, if any
    pub genre: Option<String>,

    /// Last drawn random word; `Some("")` when the no-random-word toggle
    /// suppressed the draw
    pub random_word: Option<String>,

    /// Selected feature tags, insertion-ordered, duplicate-free
    pub features: Vec<String>,

    /// Selected exclusion tags as shown to the user
    pub exclude_display: Vec<String>,

    /// Query tokens parallel to `exclude_display`
    pub exclude_query: Vec<String>,

    /// Noise token: empty, or exactly three alphabet symbols
    pub noise: String,

    /// When set, random draws yield the empty string
    pub no_random_word: bool,
}

impl SelectionState {
    /// Create an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category, clearing the now-stale genre and random word
    pub fn set_category(&mut self, name: &str) {
        self.category = Some(name.to_string());
        self.genre = None;
        self.random_word = None;
    }

    /// Select a genre within the current category
    pub fn set_genre(&mut self, name: &str) {
        self.genre = Some(name.to_string());
    }

    /// Toggle a feature tag; returns true if the tag is now selected
    pub fn toggle_feature(&mut self, name: &str) -> bool {
        if let Some(pos) = self.features.iter().position(|f| f == name) {
            self.features.remove(pos);
            false
        } else {
            self.features.push(name.to_string());
            true
        }
    }

    /// Toggle an exclusion tag; returns true if the tag is now selected
    ///
    /// Adding inserts both the display entry and its query token; removing
    /// drops both at the same position, preserving the lock-step invariant.
    pub fn toggle_exclude(&mut self, name: &str, query_token: &str) -> bool {
        if let Some(pos) = self.exclude_display.iter().position(|e| e == name) {
            self.exclude_display.remove(pos);
            self.exclude_query.remove(pos);
            false
        } else {
            self.exclude_display.push(name.to_string());
            self.exclude_query.push(query_token.to_string());
            true
        }
    }

    /// Merge committed free text into the feature list
    ///
    /// Returns the tokens that were actually added (duplicates and empty
    /// tokens are dropped).
    pub fn add_free_features(&mut self, input: &str) -> Vec<String> {
        let mut added = Vec::new();
        for token in tokenize(input) {
            if !self.features.contains(&token) {
                self.features.push(token.clone());
                added.push(token);
            }
        }
        added
    }

    /// Merge committed free text into the exclusion lists
    ///
    /// Free-text exclusions always get a `-`-prefixed token; duplicates and
    /// empty tokens are dropped.
    pub fn add_free_excludes(&mut self, input: &str) -> Vec<String> {
        let mut added = Vec::new();
        for token in tokenize(input) {
            if !self.exclude_display.contains(&token) {
                self.exclude_query.push(format!("-{token}"));
                self.exclude_display.push(token.clone());
                added.push(token);
            }
        }
        added
    }

    /// Reset the noise token to empty
    pub fn clear_noise(&mut self) {
        self.noise.clear();
    }

    /// Whether any term would make it into the final query
    #[must_use]
    pub fn has_terms(&self) -> bool {
        self.genre.as_deref().is_some_and(|g| !g.is_empty())
            || self.random_word.as_deref().is_some_and(|w| !w.is_empty())
            || !self.noise.is_empty()
            || !self.features.is_empty()
            || !self.exclude_query.is_empty()
    }
}

/// Split committed free text on commas, trimming and dropping empty tokens
fn tokenize(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
