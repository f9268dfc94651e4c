//! Preview line formatting
//!
//! A pure function of the selection state; both frontends re-render it
//! after every mutation.

use super::state::SelectionState;

/// Placeholder for a field the user has not picked yet
pub const UNSET: &str = "<unset>";
/// Placeholder for an optional field that is currently empty
pub const NONE: &str = "<none>";

/// Human-readable summary of the current selections
#[must_use]
pub fn preview_line(state: &SelectionState) -> String {
    let genre = state.genre.as_deref().filter(|g| !g.is_empty());
    let random = state.random_word.as_deref().filter(|w| !w.is_empty());

    let features = if state.features.is_empty() {
        UNSET.to_string()
    } else {
        state.features.join(", ")
    };
    let excludes = if state.exclude_display.is_empty() {
        NONE.to_string()
    } else {
        state.exclude_display.join(", ")
    };
    let noise = if state.noise.is_empty() {
        NONE
    } else {
        state.noise.as_str()
    };

    format!(
        "genre: {} | features: {} | random: {} | exclude: {} | noise: {}",
        genre.unwrap_or(UNSET),
        features,
        random.unwrap_or(NONE),
        excludes,
        noise,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_shows_placeholders() {
        let state = SelectionState::new();
        assert_eq!(
            preview_line(&state),
            "genre: <unset> | features: <unset> | random: <none> | exclude: <none> | noise: <none>"
        );
    }

    #[test]
    fn test_populated_state_joins_lists() {
        let mut state = SelectionState::new();
        state.set_category("Music");
        state.set_genre("Rock");
        state.random_word = Some("live".into());
        state.toggle_feature("HD");
        state.toggle_feature("full");
        state.toggle_exclude("shorts", "-shorts");
        state.noise = "あいう".into();

        assert_eq!(
            preview_line(&state),
            "genre: Rock | features: HD, full | random: live | exclude: shorts | noise: あいう"
        );
    }

    #[test]
    fn test_suppressed_random_word_reads_as_none() {
        let mut state = SelectionState::new();
        state.set_genre("Rock");
        state.random_word = Some(String::new());

        assert!(preview_line(&state).contains("random: <none>"));
    }
}
