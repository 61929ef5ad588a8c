//! Field-name mapping between citation markup and the record schema
//!
//! The table is ordered: the formatter emits fields in this order, and the
//! reverse mapping keeps the first markup name listed for an attribute
//! (so `arxiv` wins over its `eprint` alias when regenerating markup).

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Markup field name → internal record attribute, in canonical emit order.
pub const FIELD_MAP: &[(&str, &str)] = &[
    // Standard bibliographic vocabulary
    ("title", "title"),
    ("author", "authors"),
    ("year", "year"),
    ("month", "month"),
    ("journal", "journal"),
    ("booktitle", "book_title"),
    ("conference", "conference"),
    ("volume", "volume"),
    ("number", "issue"),
    ("issue", "issue"),
    ("pages", "pages"),
    ("publisher", "publisher"),
    ("address", "address"),
    ("edition", "edition"),
    ("series", "series"),
    ("chapter", "chapter"),
    ("school", "school"),
    ("institution", "institution"),
    ("organization", "organization"),
    ("howpublished", "how_published"),
    ("editor", "editor"),
    ("type", "thesis_type"),
    ("language", "language"),
    ("abstract", "abstract"),
    ("keywords", "keywords"),
    ("note", "note"),
    // Identifiers
    ("doi", "doi"),
    ("url", "url"),
    ("isbn", "isbn"),
    ("issn", "issn"),
    ("arxiv", "arxiv_id"),
    ("eprint", "arxiv_id"),
    ("pmid", "pmid"),
    ("pmcid", "pmcid"),
    // Extended academic vocabulary
    ("code", "code_url"),
    ("data", "data_url"),
    ("slides", "slides_url"),
    ("video", "video_url"),
    ("poster", "poster_url"),
    ("blog", "blog_url"),
    ("press", "press_url"),
    ("award", "award"),
    ("impact_factor", "impact_factor"),
    ("citation_count", "citation_count"),
    ("altmetric", "altmetric_score"),
    ("research_area", "research_area"),
    ("funding", "funding"),
    ("collaborators", "collaborators"),
    ("student_authors", "student_authors"),
    ("corresponding_author", "corresponding_author"),
    ("equal_contribution", "equal_contribution"),
    ("copyright", "copyright"),
    ("license", "license"),
];

lazy_static! {
    static ref FORWARD: HashMap<&'static str, &'static str> =
        FIELD_MAP.iter().copied().collect();

    /// attribute → canonical markup name; first table entry wins
    static ref REVERSE: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        for &(markup, attr) in FIELD_MAP {
            m.entry(attr).or_insert(markup);
        }
        m
    };

    /// Attributes passed through the normalizer without LaTeX command
    /// stripping (identifiers and numeric/positional fields).
    static ref PASSTHROUGH: HashSet<&'static str> = [
        "url", "doi", "arxiv_id", "pmid", "pmcid", "volume", "issue", "pages",
    ]
    .into_iter()
    .collect();
}

/// Look up the internal attribute for a (lower-cased) markup field name.
/// `None` means the name passes through verbatim.
pub fn target_attr(markup_name: &str) -> Option<&'static str> {
    FORWARD.get(markup_name).copied()
}

/// Canonical markup name for an internal attribute, for regeneration.
pub fn markup_name(attr: &str) -> Option<&'static str> {
    REVERSE.get(attr).copied()
}

/// Whether a target attribute skips LaTeX command stripping.
pub fn is_passthrough(attr: &str) -> bool {
    PASSTHROUGH.contains(attr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_mapping() {
        assert_eq!(target_attr("booktitle"), Some("book_title"));
        assert_eq!(target_attr("number"), Some("issue"));
        assert_eq!(target_attr("arxiv"), Some("arxiv_id"));
        assert_eq!(target_attr("eprint"), Some("arxiv_id"));
        assert_eq!(target_attr("custom_metric"), None);
    }

    #[test]
    fn test_reverse_prefers_first_alias() {
        assert_eq!(markup_name("arxiv_id"), Some("arxiv"));
        assert_eq!(markup_name("issue"), Some("number"));
        assert_eq!(markup_name("book_title"), Some("booktitle"));
    }

    #[test]
    fn test_passthrough_set() {
        assert!(is_passthrough("doi"));
        assert!(is_passthrough("pages"));
        assert!(!is_passthrough("title"));
        assert!(!is_passthrough("journal"));
    }
}
