//! Publication data loading for the labweb site generator
//!
//! The data-loading collaborator at its interface: records come from a
//! pre-structured JSON array or from raw citation markup, whichever is
//! available. Having neither is the one fatal condition the publications
//! feature surfaces to the caller.
//!
//! This crate also owns two concerns the parser deliberately leaves
//! downstream: the keyed record collection and the lab-member highlight
//! merge.

use labweb_domain::PublicationRecord;
use std::collections::HashMap;
use thiserror::Error;

/// Data-loading failures
#[derive(Debug, Error)]
pub enum DataError {
    /// Neither structured records nor markup text could be obtained.
    /// Fatal for the publications feature; everything else degrades.
    #[error("no publication data source available")]
    NoSource,
}

/// A source of publication records: structured JSON, raw markup, or both.
///
/// By the time `load` is called any fetching has already happened; the
/// source holds plain strings.
#[derive(Debug, Clone, Default)]
pub struct PublicationSource {
    structured_json: Option<String>,
    markup: Option<String>,
}

impl PublicationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a JSON array of records (the declarative site configuration
    /// path). Titles and abstracts may be plain strings or language maps.
    pub fn with_structured_json(mut self, json: impl Into<String>) -> Self {
        self.structured_json = Some(json.into());
        self
    }

    /// Supply raw citation-markup text (the bibliography file path).
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = Some(markup.into());
        self
    }

    /// Load records, preferring the structured source. A structured source
    /// that fails to deserialize falls back to the markup source; with
    /// neither usable the load fails with [`DataError::NoSource`].
    pub fn load(&self) -> Result<Vec<PublicationRecord>, DataError> {
        if let Some(json) = &self.structured_json {
            match serde_json::from_str::<Vec<PublicationRecord>>(json) {
                Ok(mut records) => {
                    for record in &mut records {
                        if record.id.is_empty() {
                            record.id = record.citation_key.clone();
                        }
                        record.derive_computed();
                    }
                    return Ok(records);
                }
                Err(err) => {
                    tracing::warn!(%err, "structured publication data unusable; trying markup");
                }
            }
        }

        if let Some(markup) = &self.markup {
            return Ok(labweb_bibtex::parse(markup));
        }

        Err(DataError::NoSource)
    }
}

/// Build the keyed collection the rendering layer looks records up in.
/// Duplicate ids silently overwrite: the last record in sequence wins.
pub fn index_records(
    records: Vec<PublicationRecord>,
) -> HashMap<String, PublicationRecord> {
    records.into_iter().map(|r| (r.id.clone(), r)).collect()
}

/// Merge site-configured lab-member highlighting into parsed records by
/// exact author-name match. The parser always emits `is_highlighted:
/// false`; this is the downstream half of that contract.
pub fn apply_highlights(records: &mut [PublicationRecord], highlighted_names: &[String]) {
    for record in records.iter_mut() {
        let mut changed = false;
        for author in &mut record.authors {
            if highlighted_names.iter().any(|n| n == &author.name) {
                author.is_highlighted = true;
                changed = true;
            }
        }
        if changed {
            // author_string is name-only, but keep derived fields coherent
            record.derive_computed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = r#"
@article{chen2023,
  author = {Wei Chen and Jane Smith},
  title = {A Paper},
  journal = {Nature},
  year = {2023},
}
"#;

    const STRUCTURED: &str = r#"[
  {
    "id": "chen2023",
    "citation_key": "chen2023",
    "record_type": "journal",
    "title": {"en": "A Paper", "zh": "一篇论文"},
    "authors": [{"name": "Wei Chen"}, {"name": "Jane Smith"}],
    "journal": "Nature",
    "year": 2023
  }
]"#;

    #[test]
    fn test_load_structured() {
        let source = PublicationSource::new().with_structured_json(STRUCTURED);
        let records = source.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_title, Some("A Paper".to_string()));
        assert_eq!(records[0].display_venue, "Nature");
        assert_eq!(records[0].author_string, "Wei Chen, Jane Smith");
    }

    #[test]
    fn test_load_markup_fallback() {
        let source = PublicationSource::new()
            .with_structured_json("not json at all")
            .with_markup(MARKUP);
        let records = source.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "chen2023");
    }

    #[test]
    fn test_structured_preferred_over_markup() {
        let source = PublicationSource::new()
            .with_structured_json(STRUCTURED)
            .with_markup("@misc{other,\n  title = {Ignored},\n}");
        let records = source.load().unwrap();
        assert_eq!(records[0].id, "chen2023");
    }

    #[test]
    fn test_no_source_is_fatal() {
        let source = PublicationSource::new();
        assert!(matches!(source.load(), Err(DataError::NoSource)));
    }

    #[test]
    fn test_index_last_wins() {
        let mut a = PublicationRecord::new("dup", Default::default());
        a.set_field("note", "first".to_string());
        let mut b = PublicationRecord::new("dup", Default::default());
        b.set_field("note", "second".to_string());

        let index = index_records(vec![a, b]);
        assert_eq!(index.len(), 1);
        assert_eq!(index["dup"].note, Some("second".to_string()));
    }

    #[test]
    fn test_apply_highlights() {
        let source = PublicationSource::new().with_markup(MARKUP);
        let mut records = source.load().unwrap();
        assert!(records[0].authors.iter().all(|a| !a.is_highlighted));

        apply_highlights(&mut records, &["Jane Smith".to_string()]);
        let jane = records[0]
            .authors
            .iter()
            .find(|a| a.name == "Jane Smith")
            .unwrap();
        assert!(jane.is_highlighted);
        let chen = records[0]
            .authors
            .iter()
            .find(|a| a.name == "Wei Chen")
            .unwrap();
        assert!(!chen.is_highlighted);
    }
}
