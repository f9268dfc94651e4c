//! Event handling for the ratatui frontend
//!
//! Maps keyboard events to session operations. The handlers are pure with
//! respect to the terminal, so they are unit-tested without one.

use super::state::{AppState, Mode, Pane};
use crate::search::SearchEngine;
use crate::session::QuerySession;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the browser
    Exit,
    /// Dispatch the current query to a search engine
    Search(SearchEngine),
    /// No action taken
    Ignored,
}

/// Number of items in the pane's backing list
fn pane_len(session: &QuerySession, pane: Pane) -> usize {
    match pane {
        Pane::Categories => session.catalog().categories.len(),
        Pane::Genres => session.current_genres().len(),
        Pane::Features => session.catalog().features.len(),
        Pane::Excludes => session.catalog().excludes.len(),
    }
}

/// Activate the item under the cursor in the focused pane
fn activate<R: Rng>(state: &mut AppState, session: &mut QuerySession, rng: &mut R) {
    let cursor = state.cursor(state.pane);
    if pane_len(session, state.pane) == 0 {
        return;
    }

    match state.pane {
        Pane::Categories => match session.select_category(cursor) {
            Ok(()) => {
                state.reset_cursor(Pane::Genres);
                let name = session.state().category.clone().unwrap_or_default();
                state.set_info(format!("Category '{name}' selected; pick a genre"));
            }
            Err(e) => state.set_error(e.to_string()),
        },
        Pane::Genres => match session.select_genre(cursor, rng) {
            Ok(()) => match session.state().random_word.as_deref() {
                Some("") => state.set_info("Genre selected (random word off)"),
                Some(word) => state.set_success(format!("Drew '{word}'")),
                None => {}
            },
            Err(e) => state.set_error(e.to_string()),
        },
        Pane::Features => match session.toggle_feature(cursor) {
            Ok(true) => state.set_info("Feature added"),
            Ok(false) => state.set_info("Feature removed"),
            Err(e) => state.set_error(e.to_string()),
        },
        Pane::Excludes => match session.toggle_exclude(cursor) {
            Ok(true) => state.set_info("Exclusion added"),
            Ok(false) => state.set_info("Exclusion removed"),
            Err(e) => state.set_error(e.to_string()),
        },
    }
}

/// Handle events in normal mode
fn handle_normal_mode<R: Rng>(
    state: &mut AppState,
    session: &mut QuerySession,
    rng: &mut R,
    key: KeyEvent,
) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('q'), KeyModifiers::NONE) => EventResult::Exit,

        // Pane focus
        (KeyCode::Tab | KeyCode::Right, _) => {
            state.focus_next();
            state.clamp_cursor(pane_len(session, state.pane));
            EventResult::Continue
        }
        (KeyCode::BackTab | KeyCode::Left, _) => {
            state.focus_prev();
            state.clamp_cursor(pane_len(session, state.pane));
            EventResult::Continue
        }

        // Navigation within the focused pane
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.cursor_down(pane_len(session, state.pane));
            EventResult::Continue
        }

        // Selection
        (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            activate(state, session, rng);
            EventResult::Continue
        }

        // Random word
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            match session.reroll(rng) {
                Ok(()) => match session.state().random_word.as_deref() {
                    Some("") => state.set_info("Random word off"),
                    Some(word) => state.set_success(format!("Drew '{word}'")),
                    None => {}
                },
                Err(e) => state.set_error(e.to_string()),
            }
            EventResult::Continue
        }
        (KeyCode::Char('w'), KeyModifiers::NONE) => {
            let active = session.toggle_no_random_word();
            state.set_info(if active {
                "Random word disabled for the next draw"
            } else {
                "Random word enabled for the next draw"
            });
            EventResult::Continue
        }

        // Noise
        (KeyCode::Char('n'), KeyModifiers::NONE) => {
            let noise = session.generate_noise(rng).to_string();
            state.set_info(format!("Noise '{noise}'"));
            EventResult::Continue
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            session.clear_noise();
            state.set_info("Noise cleared");
            EventResult::Continue
        }

        // Free text
        (KeyCode::Char('f'), KeyModifiers::NONE) => {
            state.input.clear();
            state.mode = Mode::FeatureInput;
            EventResult::Continue
        }
        (KeyCode::Char('x'), KeyModifiers::NONE) => {
            state.input.clear();
            state.mode = Mode::ExcludeInput;
            EventResult::Continue
        }

        // Search dispatch
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            EventResult::Search(SearchEngine::VideoSearch)
        }
        (KeyCode::Char('y'), KeyModifiers::NONE) => EventResult::Search(SearchEngine::Youtube),

        // Help overlay
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while a free-text input modal is active
fn handle_input_mode(state: &mut AppState, session: &mut QuerySession, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            state.input.clear();
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        KeyCode::Enter => {
            let input = std::mem::take(&mut state.input);
            let added = match state.mode {
                Mode::FeatureInput => session.add_feature_text(&input),
                Mode::ExcludeInput => session.add_exclude_text(&input),
                Mode::Normal | Mode::Help => Vec::new(),
            };
            if added.is_empty() {
                state.set_info("No tags added");
            } else {
                state.set_success(format!("Added: {}", added.join(", ")));
            }
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        KeyCode::Backspace => {
            state.input.pop();
            EventResult::Continue
        }
        KeyCode::Char(c) => {
            state.input.push(c);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode: any key closes the overlay
fn handle_help_mode(state: &mut AppState) -> EventResult {
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Dispatch a key event according to the current mode
pub fn handle_key<R: Rng>(
    state: &mut AppState,
    session: &mut QuerySession,
    rng: &mut R,
    key: KeyEvent,
) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, session, rng, key),
        Mode::Help => handle_help_mode(state),
        Mode::FeatureInput | Mode::ExcludeInput => handle_input_mode(state, session, key),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle<R: Rng>(
    state: &mut AppState,
    session: &mut QuerySession,
    rng: &mut R,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, session, rng, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Catalog, Category, ExcludeTag, Genre};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session() -> QuerySession {
        QuerySession::new(Catalog {
            categories: vec![Category {
                name: "Music".into(),
                genres: vec![Genre {
                    name: "Rock".into(),
                    words: vec!["live".into()],
                }],
            }],
            features: vec!["HD".into(), "full".into()],
            excludes: vec![ExcludeTag {
                name: "shorts".into(),
                substitution: Some("-shorts".into()),
            }],
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_escape_exits() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        let result = handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Esc));
        assert_eq!(result, EventResult::Exit);
    }

    #[test]
    fn test_tab_cycles_panes() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Tab));
        assert_eq!(state.pane, Pane::Genres);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::BackTab));
        assert_eq!(state.pane, Pane::Categories);
    }

    #[test]
    fn test_category_then_genre_selection_draws_word() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Enter));
        assert_eq!(session.state().category.as_deref(), Some("Music"));

        state.pane = Pane::Genres;
        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Enter));
        assert_eq!(session.state().genre.as_deref(), Some("Rock"));
        assert_eq!(session.state().random_word.as_deref(), Some("live"));
    }

    #[test]
    fn test_space_toggles_feature_both_ways() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);
        state.pane = Pane::Features;

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char(' ')));
        assert_eq!(session.state().features, vec!["HD"]);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char(' ')));
        assert!(session.state().features.is_empty());
    }

    #[test]
    fn test_noise_keys() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('n')));
        assert_eq!(session.state().noise.chars().count(), 3);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('c')));
        assert!(session.state().noise.is_empty());
    }

    #[test]
    fn test_search_keys_request_dispatch() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(
            handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('s'))),
            EventResult::Search(SearchEngine::VideoSearch)
        );
        assert_eq!(
            handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('y'))),
            EventResult::Search(SearchEngine::Youtube)
        );
    }

    #[test]
    fn test_feature_input_flow() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('f')));
        assert_eq!(state.mode, Mode::FeatureInput);

        for c in "a, b ,c".chars() {
            handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char(c)));
        }
        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Enter));

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(session.state().features, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_input_escape_discards_buffer() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('x')));
        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('z')));
        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Esc));

        assert_eq!(state.mode, Mode::Normal);
        assert!(state.input.is_empty());
        assert!(session.state().exclude_display.is_empty());
    }

    #[test]
    fn test_reroll_without_genre_reports_error() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('r')));
        let status = state.status.unwrap();
        assert_eq!(status.level, crate::ui::MessageLevel::Error);
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut state = AppState::new();
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(1);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('?')));
        assert_eq!(state.mode, Mode::Help);

        handle_key(&mut state, &mut session, &mut rng, key(KeyCode::Char('z')));
        assert_eq!(state.mode, Mode::Normal);
    }
}
