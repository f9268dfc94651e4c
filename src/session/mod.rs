//! Query session - the single mutation path over the selection state
//!
//! [`QuerySession`] owns the loaded [`Catalog`] and the mutable
//! [`SelectionState`] and exposes every user-level operation as a method.
//! Both frontends (the ratatui browser and the flag-driven `build`
//! command) go through this type; nothing else mutates the state.
//!
//! # Workflow
//!
//! ```text
//! select_category(i)      single-select; genre + random word go stale
//!     ↓
//! select_genre(i)         single-select; triggers a random-word draw
//!     ↓
//! toggle_feature / toggle_exclude / free text / noise   (any order)
//!     ↓
//! build_query()           assembled terms, or EmptyQuery
//! ```

use crate::builder::{self, BuilderError, SelectionState};
use crate::dataset::{Catalog, Category, ExcludeTag, Genre};
use rand::Rng;
use thiserror::Error;

/// Query session error type
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while driving a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error("No category selected")]
    NoCategorySelected,

    #[error("No genre selected")]
    NoGenreSelected,

    #[error("{kind} index {index} is out of range")]
    IndexOutOfRange { kind: &'static str, index: usize },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown genre '{0}'")]
    UnknownGenre(String),
}

/// Owns the catalog and the selection state for one run of the program
#[derive(Debug)]
pub struct QuerySession {
    catalog: Catalog,
    state: SelectionState,
    category_idx: Option<usize>,
    genre_idx: Option<usize>,
}

impl QuerySession {
    /// Create a session over a loaded catalog
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: SelectionState::new(),
            category_idx: None,
            genre_idx: None,
        }
    }

    /// The loaded catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection state
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Index of the selected category, if any
    #[must_use]
    pub const fn category_index(&self) -> Option<usize> {
        self.category_idx
    }

    /// Index of the selected genre within the selected category, if any
    #[must_use]
    pub const fn genre_index(&self) -> Option<usize> {
        self.genre_idx
    }

    /// The currently selected category, if any
    #[must_use]
    pub fn current_category(&self) -> Option<&Category> {
        self.category_idx.and_then(|i| self.catalog.categories.get(i))
    }

    /// Genres of the currently selected category (empty before one is picked)
    #[must_use]
    pub fn current_genres(&self) -> &[Genre] {
        self.current_category().map_or(&[], |c| c.genres.as_slice())
    }

    /// Select a category by position
    ///
    /// Clears the genre and random word, which are stale until a genre in
    /// the new category is picked.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` does not name a category.
    pub fn select_category(&mut self, index: usize) -> Result<()> {
        let category = self.catalog.categories.get(index).ok_or(
            SessionError::IndexOutOfRange {
                kind: "category",
                index,
            },
        )?;

        self.state.set_category(&category.name);
        self.category_idx = Some(index);
        self.genre_idx = None;
        Ok(())
    }

    /// Select a genre by position within the current category
    ///
    /// Triggers a random-word draw: with the no-random-word toggle active
    /// the word is set to empty, otherwise one word is drawn uniformly.
    /// The genre stays selected even when the draw fails on an empty pool.
    ///
    /// # Errors
    ///
    /// Returns `NoCategorySelected` before a category is picked,
    /// `IndexOutOfRange` for a bad index, and `EmptyWordPool` when the
    /// genre has no words to draw from.
    pub fn select_genre<R: Rng>(&mut self, index: usize, rng: &mut R) -> Result<()> {
        if self.category_idx.is_none() {
            return Err(SessionError::NoCategorySelected);
        }
        let genre = self
            .current_genres()
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                kind: "genre",
                index,
            })?
            .clone();

        self.state.set_genre(&genre.name);
        self.genre_idx = Some(index);
        // A word drawn for the previous genre must not leak into this one
        self.state.random_word = None;
        self.draw_for(&genre, rng)
    }

    /// Re-run the random-word draw for the current category/genre pair
    ///
    /// # Errors
    ///
    /// Returns `NoGenreSelected` before a genre is picked, and
    /// `EmptyWordPool` when the genre has no words.
    pub fn reroll<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let genre = self
            .genre_idx
            .and_then(|i| self.current_genres().get(i))
            .ok_or(SessionError::NoGenreSelected)?
            .clone();
        self.draw_for(&genre, rng)
    }

    fn draw_for<R: Rng>(&mut self, genre: &Genre, rng: &mut R) -> Result<()> {
        if self.state.no_random_word {
            self.state.random_word = Some(String::new());
            return Ok(());
        }
        let word = builder::draw_word(rng, genre)?;
        self.state.random_word = Some(word);
        Ok(())
    }

    /// Flip the no-random-word toggle; takes effect on the next draw
    pub fn toggle_no_random_word(&mut self) -> bool {
        self.state.no_random_word = !self.state.no_random_word;
        self.state.no_random_word
    }

    /// Toggle a feature tag by catalog position; returns true when selected
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` does not name a feature.
    pub fn toggle_feature(&mut self, index: usize) -> Result<bool> {
        let name = self
            .catalog
            .features
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                kind: "feature",
                index,
            })?
            .clone();
        Ok(self.state.toggle_feature(&name))
    }

    /// Toggle an exclusion tag by catalog position; returns true when selected
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` does not name an exclusion tag.
    pub fn toggle_exclude(&mut self, index: usize) -> Result<bool> {
        let tag: ExcludeTag = self
            .catalog
            .excludes
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                kind: "exclude",
                index,
            })?
            .clone();
        Ok(self.state.toggle_exclude(&tag.name, &tag.query_token()))
    }

    /// Select a category by display name (non-interactive path)
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if no category has that name.
    pub fn select_category_by_name(&mut self, name: &str) -> Result<()> {
        let index = self
            .catalog
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| SessionError::UnknownCategory(name.to_string()))?;
        self.select_category(index)
    }

    /// Select a genre by display name within the current category
    ///
    /// # Errors
    ///
    /// Returns `NoCategorySelected` before a category is picked and
    /// `UnknownGenre` if the current category has no genre of that name.
    pub fn select_genre_by_name<R: Rng>(&mut self, name: &str, rng: &mut R) -> Result<()> {
        if self.category_idx.is_none() {
            return Err(SessionError::NoCategorySelected);
        }
        let index = self
            .current_genres()
            .iter()
            .position(|g| g.name == name)
            .ok_or_else(|| SessionError::UnknownGenre(name.to_string()))?;
        self.select_genre(index, rng)
    }

    /// Merge committed free text into the feature list; returns added tokens
    pub fn add_feature_text(&mut self, input: &str) -> Vec<String> {
        self.state.add_free_features(input)
    }

    /// Merge committed free text into the exclusion lists; returns added tokens
    pub fn add_exclude_text(&mut self, input: &str) -> Vec<String> {
        self.state.add_free_excludes(input)
    }

    /// Generate a fresh 3-symbol noise token
    pub fn generate_noise<R: Rng>(&mut self, rng: &mut R) -> &str {
        self.state.noise = builder::noise_token(rng);
        &self.state.noise
    }

    /// Clear the noise token
    pub fn clear_noise(&mut self) {
        self.state.clear_noise();
    }

    /// The preview line for the current state
    #[must_use]
    pub fn preview(&self) -> String {
        builder::preview_line(&self.state)
    }

    /// Assemble the final query
    ///
    /// # Errors
    ///
    /// Returns `EmptyQuery` when nothing is selected; no navigation
    /// happens and the state is unchanged.
    pub fn build_query(&self) -> Result<String> {
        builder::assemble(&self.state).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn catalog() -> Catalog {
        Catalog {
            categories: vec![
                Category {
                    name: "Entertainment".into(),
                    genres: vec![
                        Genre {
                            name: "Comedy".into(),
                            words: vec!["Sketch".into()],
                        },
                        Genre {
                            name: "Drama".into(),
                            words: vec![],
                        },
                    ],
                },
                Category {
                    name: "Music".into(),
                    genres: vec![Genre {
                        name: "Rock".into(),
                        words: vec!["live".into(), "cover".into()],
                    }],
                },
            ],
            features: vec!["Funny".into(), "HD".into()],
            excludes: vec![
                ExcludeTag {
                    name: "shorts".into(),
                    substitution: Some("-shorts".into()),
                },
                ExcludeTag {
                    name: "boring".into(),
                    substitution: None,
                },
            ],
        }
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(99)
    }

    #[test]
    fn test_genre_selection_draws_a_word_from_that_genre() {
        let mut session = QuerySession::new(catalog());
        let mut rng = rng();

        session.select_category(1).unwrap();
        session.select_genre(0, &mut rng).unwrap();

        let word = session.state().random_word.clone().unwrap();
        assert!(["live", "cover"].contains(&word.as_str()));
    }

    #[test]
    fn test_switching_category_clears_genre_and_word() {
        let mut session = QuerySession::new(catalog());
        let mut rng = rng();

        session.select_category(0).unwrap();
        session.select_genre(0, &mut rng).unwrap();
        session.select_category(1).unwrap();

        assert_eq!(session.state().category.as_deref(), Some("Music"));
        assert!(session.state().genre.is_none());
        assert!(session.state().random_word.is_none());
        assert!(session.genre_index().is_none());
    }

    #[test]
    fn test_no_random_word_draw_yields_empty() {
        let mut session = QuerySession::new(catalog());
        let mut rng = rng();

        session.toggle_no_random_word();
        session.select_category(0).unwrap();
        session.select_genre(0, &mut rng).unwrap();

        assert_eq!(session.state().random_word.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_pool_fails_but_keeps_the_genre() {
        let mut session = QuerySession::new(catalog());
        let mut rng = rng();

        session.select_category(0).unwrap();
        let err = session.select_genre(1, &mut rng).unwrap_err();

        assert!(matches!(
            err,
            SessionError::Builder(BuilderError::EmptyWordPool(_))
        ));
        assert_eq!(session.state().genre.as_deref(), Some("Drama"));
        assert!(session.state().random_word.is_none());
    }

    #[test]
    fn test_reroll_requires_a_genre() {
        let mut session = QuerySession::new(catalog());
        let mut rng = rng();

        assert!(matches!(
            session.reroll(&mut rng),
            Err(SessionError::NoGenreSelected)
        ));
    }

    #[test]
    fn test_reroll_only_touches_the_random_word() {
        let mut session = QuerySession::new(catalog());
        let mut rng = rng();

        session.select_category(1).unwrap();
        session.select_genre(0, &mut rng).unwrap();
        session.toggle_feature(1).unwrap();
        session.generate_noise(&mut rng);
        let noise_before = session.state().noise.clone();

        session.reroll(&mut rng).unwrap();

        assert_eq!(session.state().features, vec!["HD"]);
        assert_eq!(session.state().noise, noise_before);
        assert!(session.state().random_word.is_some());
    }

    #[test]
    fn test_catalog_exclude_uses_its_substitution() {
        let mut session = QuerySession::new(catalog());

        assert!(session.toggle_exclude(0).unwrap());
        assert!(session.toggle_exclude(1).unwrap());

        assert_eq!(session.state().exclude_query, vec!["-shorts", "-boring"]);

        assert!(!session.toggle_exclude(0).unwrap());
        assert_eq!(session.state().exclude_display, vec!["boring"]);
        assert_eq!(session.state().exclude_query, vec!["-boring"]);
    }

    #[test]
    fn test_selection_by_name() {
        let mut session = QuerySession::new(catalog());
        let mut rng = rng();

        assert!(matches!(
            session.select_genre_by_name("Comedy", &mut rng),
            Err(SessionError::NoCategorySelected)
        ));

        session.select_category_by_name("Entertainment").unwrap();
        session.select_genre_by_name("Comedy", &mut rng).unwrap();
        assert_eq!(session.state().random_word.as_deref(), Some("Sketch"));

        assert!(matches!(
            session.select_genre_by_name("Rock", &mut rng),
            Err(SessionError::UnknownGenre(_))
        ));
    }

    #[test]
    fn test_worked_example_query() {
        let mut session = QuerySession::new(catalog());
        let mut rng = rng();

        session.select_category_by_name("Entertainment").unwrap();
        session.select_genre_by_name("Comedy", &mut rng).unwrap();
        session.toggle_feature(0).unwrap();
        session.add_exclude_text("boring");

        assert_eq!(
            session.build_query().unwrap(),
            "Comedy Sketch Funny -boring"
        );
    }

    #[test]
    fn test_empty_query_is_rejected_without_state_change() {
        let session = QuerySession::new(catalog());

        assert!(matches!(
            session.build_query(),
            Err(SessionError::Builder(BuilderError::EmptyQuery))
        ));
        assert_eq!(*session.state(), SelectionState::new());
    }
}
