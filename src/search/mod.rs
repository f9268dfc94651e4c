//! Search dispatch - turning a finished query into an open browser tab

use clap::ValueEnum;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while dispatching a query
#[derive(Debug, Error)]
pub enum SearchError {
    /// The system browser could not be launched
    #[error("Failed to open '{url}': {source}")]
    Launch {
        url: String,
        source: std::io::Error,
    },
}

/// The two supported search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// Video search on the general-purpose engine
    #[default]
    #[serde(rename = "video")]
    #[value(name = "video")]
    VideoSearch,
    /// YouTube result search
    #[value(name = "youtube")]
    Youtube,
}

impl SearchEngine {
    /// Short name used on the CLI and in the config file
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VideoSearch => "video",
            Self::Youtube => "youtube",
        }
    }

    /// Full URL for a query on this engine, percent-encoded
    #[must_use]
    pub fn search_url(self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        match self {
            Self::VideoSearch => {
                format!("https://www.google.com/search?tbm=vid&q={encoded}")
            }
            Self::Youtube => {
                format!("https://www.youtube.com/results?search_query={encoded}")
            }
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Open a query on the given engine in the system browser
///
/// Returns the URL that was opened.
///
/// # Errors
///
/// Returns `SearchError::Launch` if the system handler fails to start.
pub fn dispatch(engine: SearchEngine, query: &str) -> Result<String, SearchError> {
    let url = engine.search_url(query);
    match open::that(&url) {
        Ok(()) => Ok(url),
        Err(source) => Err(SearchError::Launch { url, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_search_url() {
        let url = SearchEngine::VideoSearch.search_url("Comedy Sketch");
        assert!(url.starts_with("https://www.google.com/search?tbm=vid&q="));
        assert!(url.ends_with("Comedy%20Sketch"));
    }

    #[test]
    fn test_youtube_url() {
        let url = SearchEngine::Youtube.search_url("Rock live");
        assert!(url.starts_with("https://www.youtube.com/results?search_query="));
        assert!(url.ends_with("Rock%20live"));
    }

    #[test]
    fn test_non_ascii_query_is_fully_encoded() {
        let url = SearchEngine::Youtube.search_url("あいう");
        let (_, encoded) = url.split_once('=').unwrap();
        assert!(encoded.chars().all(|c| c == '%' || c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_engine_names_round_trip() {
        assert_eq!(SearchEngine::VideoSearch.as_str(), "video");
        assert_eq!(SearchEngine::Youtube.to_string(), "youtube");
    }
}
