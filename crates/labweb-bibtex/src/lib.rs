//! Citation-markup parsing and regeneration
//!
//! This crate turns a BibTeX-like citation markup document into normalized
//! [`PublicationRecord`]s and regenerates canonical markup from them:
//! - Entry scanner with depth-counted brace matching and skip-to-next-`@`
//!   recovery (lenient by default, strict mode reports scan errors)
//! - Field normalizer: fixed field-name mapping, LaTeX escape cleaning,
//!   author/keyword splitting, computed display fields
//! - Formatter: record → markup, closing the round trip
//!
//! The parser is a pure transform: it never fails on malformed input,
//! it degrades field-by-field and entry-by-entry.

pub mod fields;
pub mod formatter;
pub mod latex;
pub mod normalizer;
pub mod scanner;

pub use formatter::{generate_document, generate_markup};
pub use normalizer::parse_entry;
pub use scanner::{extract_entries, extract_entries_strict, RawEntry, ScanError, ScanResult};

use labweb_domain::PublicationRecord;

/// Parse a whole citation-markup document into normalized records.
///
/// Malformed entries are skipped silently; output order matches document
/// order, one record per extracted entry.
pub fn parse(document: &str) -> Vec<PublicationRecord> {
    extract_entries(document)
        .iter()
        .map(normalizer::parse_entry)
        .collect()
}

/// Outcome of a strict parse: the records plus the scan errors that the
/// lenient path would have swallowed.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub records: Vec<PublicationRecord>,
    pub errors: Vec<ScanError>,
}

/// Parse a document, reporting malformed entries instead of dropping them
/// silently. The records are the same ones [`parse`] would produce.
pub fn parse_strict(document: &str) -> ParseOutcome {
    let scan = extract_entries_strict(document);
    ParseOutcome {
        records: scan.entries.iter().map(normalizer::parse_entry).collect(),
        errors: scan.errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labweb_domain::PublicationType;

    #[test]
    fn test_parse_document_order_preserved() {
        let doc = r#"
@article{first2024,
  title = {First Paper},
  author = {Jane Smith},
}

@book{second2023,
  title = {Second Book},
}
"#;
        let records = parse(doc);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "first2024");
        assert_eq!(records[1].id, "second2023");
        assert_eq!(records[0].record_type, PublicationType::Journal);
        assert_eq!(records[1].record_type, PublicationType::Book);
    }

    #[test]
    fn test_parse_strict_reports_malformed_entry() {
        let doc = r#"
@article{broken2024,
  title = {Never closed,

@article{ok2024,
  title = {Fine},
}
"#;
        let outcome = parse_strict(doc);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, "ok2024");
        assert_eq!(outcome.errors.len(), 1);
    }
}
