//! Author representation and author-field utilities

use serde::{Deserialize, Serialize};

/// An author of a publication, in citation order.
///
/// `is_highlighted` is always `false` when a record comes out of the
/// parser; lab-member highlighting is merged in downstream from site
/// configuration (see `labweb-data`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub is_highlighted: bool,
}

impl Author {
    /// Create an author with the highlight flag unset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_highlighted: false,
        }
    }
}

/// Split a BibTeX-style author field into individual names.
///
/// Names are separated by `" and "` (case-insensitive, whitespace on both
/// sides). Each name is trimmed; empty segments are dropped. Order is
/// preserved.
pub fn split_author_field(field: &str) -> Vec<Author> {
    let mut authors = Vec::new();
    // ASCII-only fold keeps byte offsets aligned with the original text
    let lower: String = field.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut start = 0;
    let mut search = 0;

    while let Some(rel) = lower[search..].find(" and ") {
        let pos = search + rel;
        // The separator must be a standalone word, which " and " with the
        // surrounding spaces already guarantees.
        push_author(&mut authors, &field[start..pos]);
        start = pos + " and ".len();
        search = start;
    }
    push_author(&mut authors, &field[start..]);
    authors
}

fn push_author(authors: &mut Vec<Author>, segment: &str) {
    let name = segment.trim();
    if !name.is_empty() {
        authors.push(Author::new(name));
    }
}

/// Join author names with `", "` for display (no final "and").
pub fn join_author_names(authors: &[Author]) -> String {
    authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join author names with `" and "` for citation markup.
pub fn join_author_field(authors: &[Author]) -> String {
    authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}
