//! Interactive ratatui frontend
//!
//! A thin view binding over [`crate::session::QuerySession`]: the widgets
//! render the session's catalog and selection state, and the event handlers
//! translate key presses into session calls. All query semantics live in
//! the session and builder modules; nothing here mutates state directly.

mod app;
mod events;
mod state;
mod theme;
mod widgets;

pub use app::run_browse;
pub use state::{AppState, MessageLevel, Mode, Pane};
pub use theme::Theme;

use thiserror::Error;

/// UI error type
pub type Result<T> = std::result::Result<T, UiError>;

/// Errors that can occur in the interactive frontend
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal I/O failure
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}
