//! Query building - the UI-agnostic core of seekr
//!
//! This module holds the selection state and every pure operation over it:
//! toggling, random draws, noise generation, free-text merging, the preview
//! line and final query assembly. Both frontends (the ratatui browser and
//! the flag-driven `build` command) drive the same code through
//! [`crate::session::QuerySession`].

pub mod picker;
pub mod preview;
pub mod query;
pub mod state;

pub use picker::{NOISE_ALPHABET, NOISE_LEN, draw_word, noise_token};
pub use preview::preview_line;
pub use query::assemble;
pub use state::SelectionState;

use thiserror::Error;

/// Errors raised by query-building operations
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A random draw was requested from a genre with no words
    #[error("Genre '{0}' has no words to draw from")]
    EmptyWordPool(String),

    /// Query assembly found nothing selected
    #[error("No search terms selected")]
    EmptyQuery,
}
