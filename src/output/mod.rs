//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output on the
//! non-interactive path: the preview line, the assembled query, and the
//! catalog listing.

use crate::builder::SelectionState;
use crate::dataset::Catalog;
use colored::Colorize;

/// Format the preview line for terminal display
#[must_use]
pub fn preview_line(state: &SelectionState, quiet: bool) -> String {
    let line = crate::builder::preview_line(state);
    if quiet {
        line
    } else {
        format!("{} {}", "Preview:".bold(), line)
    }
}

/// Format the assembled query for terminal display
#[must_use]
pub fn query_line(query: &str, quiet: bool) -> String {
    if quiet {
        query.to_string()
    } else {
        format!("{} {}", "Query:".bold(), query.green())
    }
}

/// Format the URL a dispatch opened
#[must_use]
pub fn opened_line(url: &str) -> String {
    format!("Opened {}", url.cyan())
}

/// Format the catalog tree for the `list` command
///
/// With `words` set, every genre also lists its draw pool.
#[must_use]
pub fn catalog_tree(catalog: &Catalog, words: bool, quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        out.push_str("Categories:\n");
    }
    for category in &catalog.categories {
        out.push_str(&format!("  {}\n", category.name.blue().bold()));
        for genre in &category.genres {
            out.push_str(&format!(
                "    {} ({} word(s))\n",
                genre.name,
                genre.words.len()
            ));
            if words {
                for word in &genre.words {
                    out.push_str(&format!("      {word}\n"));
                }
            }
        }
    }

    if !quiet {
        out.push_str("Features:\n");
    }
    for feature in &catalog.features {
        out.push_str(&format!("  {feature}\n"));
    }

    if !quiet {
        out.push_str("Excludes:\n");
    }
    for exclude in &catalog.excludes {
        out.push_str(&format!(
            "  {} -> {}\n",
            exclude.name,
            exclude.query_token().dimmed()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Category, ExcludeTag, Genre};

    fn catalog() -> Catalog {
        Catalog {
            categories: vec![Category {
                name: "Music".into(),
                genres: vec![Genre {
                    name: "Rock".into(),
                    words: vec!["live".into()],
                }],
            }],
            features: vec!["HD".into()],
            excludes: vec![ExcludeTag {
                name: "shorts".into(),
                substitution: Some("-shorts".into()),
            }],
        }
    }

    #[test]
    fn test_quiet_query_line_is_bare() {
        assert_eq!(query_line("Rock live", true), "Rock live");
    }

    #[test]
    fn test_catalog_tree_lists_every_group() {
        colored::control::set_override(false);
        let tree = catalog_tree(&catalog(), false, false);

        assert!(tree.contains("Music"));
        assert!(tree.contains("Rock (1 word(s))"));
        assert!(tree.contains("HD"));
        assert!(tree.contains("shorts -> -shorts"));
        assert!(!tree.contains("live\n"));
    }

    #[test]
    fn test_catalog_tree_with_words_lists_draw_pools() {
        colored::control::set_override(false);
        let tree = catalog_tree(&catalog(), true, true);

        assert!(tree.contains("live"));
        assert!(!tree.contains("Categories:"));
    }
}
