//! Final query assembly

use super::BuilderError;
use super::state::SelectionState;

/// Assemble the final search query from the current selections
///
/// Terms appear in a fixed order: genre, random word, noise, features
/// (insertion order), exclude tokens (insertion order), joined by single
/// spaces. Empty terms never contribute.
///
/// # Errors
///
/// Returns `BuilderError::EmptyQuery` when no term is selected at all.
pub fn assemble(state: &SelectionState) -> Result<String, BuilderError> {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(genre) = state.genre.as_deref() {
        parts.push(genre);
    }
    if let Some(word) = state.random_word.as_deref() {
        parts.push(word);
    }
    parts.push(state.noise.as_str());
    parts.extend(state.features.iter().map(String::as_str));
    parts.extend(state.exclude_query.iter().map(String::as_str));

    parts.retain(|p| !p.trim().is_empty());
    let query = parts.join(" ").trim().to_string();

    if query.is_empty() {
        return Err(BuilderError::EmptyQuery);
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_term_order() {
        let mut state = SelectionState::new();
        state.set_category("Entertainment");
        state.set_genre("Comedy");
        state.random_word = Some("Sketch".into());
        state.toggle_feature("Funny");
        state.add_free_excludes("boring");

        assert_eq!(assemble(&state).unwrap(), "Comedy Sketch Funny -boring");
    }

    #[test]
    fn test_noise_sits_between_random_word_and_features() {
        let mut state = SelectionState::new();
        state.set_genre("Rock");
        state.random_word = Some("live".into());
        state.noise = "かきく".into();
        state.toggle_feature("HD");

        assert_eq!(assemble(&state).unwrap(), "Rock live かきく HD");
    }

    #[test]
    fn test_empty_state_is_an_error() {
        let state = SelectionState::new();
        assert!(matches!(assemble(&state), Err(BuilderError::EmptyQuery)));
    }

    #[test]
    fn test_suppressed_random_word_is_skipped() {
        let mut state = SelectionState::new();
        state.set_genre("Rock");
        state.random_word = Some(String::new());

        assert_eq!(assemble(&state).unwrap(), "Rock");
    }

    #[test]
    fn test_exclude_tokens_keep_insertion_order() {
        let mut state = SelectionState::new();
        state.toggle_exclude("shorts", "-shorts");
        state.add_free_excludes("boring");
        state.toggle_exclude("reaction", "-reaction");

        assert_eq!(assemble(&state).unwrap(), "-shorts -boring -reaction");
    }
}
