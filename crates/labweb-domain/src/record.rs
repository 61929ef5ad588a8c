//! Publication record domain model

use super::{
    identifier_url, join_author_field, join_author_names, split_author_field, Author, LinkKind,
    LocalizedText,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Internal publication type vocabulary
///
/// Derived from the citation-markup entry type via a fixed lookup table;
/// unrecognized entry types degrade to `Other`, never to an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationType {
    Journal,
    Conference,
    BookChapter,
    Book,
    Thesis,
    Report,
    Preprint,
    Patent,
    Dataset,
    Software,
    #[default]
    Other,
}

impl PublicationType {
    /// Map a citation-markup entry type (case-insensitive) to the internal
    /// vocabulary.
    pub fn from_entry_type(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "article" => Self::Journal,
            "inproceedings" | "conference" | "proceedings" => Self::Conference,
            "incollection" | "inbook" => Self::BookChapter,
            "book" => Self::Book,
            "phdthesis" | "mastersthesis" | "thesis" => Self::Thesis,
            "techreport" | "report" => Self::Report,
            "unpublished" | "preprint" => Self::Preprint,
            "patent" => Self::Patent,
            "dataset" => Self::Dataset,
            "software" => Self::Software,
            _ => Self::Other,
        }
    }

    /// Mirror of [`from_entry_type`](Self::from_entry_type): the canonical
    /// entry type emitted when regenerating markup. `Other` serializes as
    /// `misc`.
    pub fn to_entry_type(self) -> &'static str {
        match self {
            Self::Journal => "article",
            Self::Conference => "inproceedings",
            Self::BookChapter => "incollection",
            Self::Book => "book",
            Self::Thesis => "phdthesis",
            Self::Report => "techreport",
            Self::Preprint => "unpublished",
            Self::Patent => "patent",
            Self::Dataset => "dataset",
            Self::Software => "software",
            Self::Other => "misc",
        }
    }
}

/// A normalized publication record
///
/// The external-facing entity produced by the parser and consumed by the
/// rendering layer. Mapped fields are concrete optionals; unknown field
/// names pass through verbatim in `extra_fields`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationRecord {
    pub id: String,
    pub citation_key: String,
    pub record_type: PublicationType,

    pub title: Option<LocalizedText>,
    pub abstract_text: Option<LocalizedText>,
    pub authors: Vec<Author>,
    pub keywords: Vec<String>,

    // Venue fields (at most one is the effective venue)
    pub journal: Option<String>,
    pub conference: Option<String>,
    pub book_title: Option<String>,
    pub school: Option<String>,
    pub how_published: Option<String>,

    // Standard bibliographic fields
    pub year: Option<i32>,
    /// Original year text when it did not parse as an integer
    pub raw_year: Option<String>,
    pub month: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    pub publisher: Option<String>,
    pub address: Option<String>,
    pub edition: Option<String>,
    pub series: Option<String>,
    pub chapter: Option<String>,
    pub institution: Option<String>,
    pub organization: Option<String>,
    pub editor: Option<String>,
    pub note: Option<String>,
    pub thesis_type: Option<String>,
    pub language: Option<String>,

    // Identifiers
    pub doi: Option<String>,
    pub url: Option<String>,
    pub isbn: Option<String>,
    pub issn: Option<String>,
    pub arxiv_id: Option<String>,
    pub pmid: Option<String>,
    pub pmcid: Option<String>,

    // Extended academic fields, carried through verbatim
    pub code_url: Option<String>,
    pub data_url: Option<String>,
    pub slides_url: Option<String>,
    pub video_url: Option<String>,
    pub poster_url: Option<String>,
    pub blog_url: Option<String>,
    pub press_url: Option<String>,
    pub award: Option<String>,
    pub impact_factor: Option<String>,
    pub citation_count: Option<String>,
    pub altmetric_score: Option<String>,
    pub research_area: Option<String>,
    pub funding: Option<String>,
    pub collaborators: Option<String>,
    pub student_authors: Option<String>,
    pub corresponding_author: Option<String>,
    pub equal_contribution: Option<String>,
    pub copyright: Option<String>,
    pub license: Option<String>,

    /// Catch-all for field names outside the mapping table
    pub extra_fields: BTreeMap<String, String>,

    /// Original citation-markup text for this entry, preserved verbatim
    pub raw_markup: Option<String>,

    // Derived fields, set once by `derive_computed`
    pub display_title: Option<String>,
    pub author_string: String,
    pub display_venue: String,
}

impl PublicationRecord {
    /// Create a record keyed by its citation key
    pub fn new(citation_key: impl Into<String>, record_type: PublicationType) -> Self {
        let citation_key = citation_key.into();
        Self {
            id: citation_key.clone(),
            citation_key,
            record_type,
            ..Self::default()
        }
    }

    /// Set a field value by internal attribute name.
    ///
    /// Sequence-valued attributes (`authors`, `keywords`) are split here;
    /// `year` gets a best-effort integer parse with the raw text kept on
    /// failure. Unrecognized attribute names land in `extra_fields`.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = Some(LocalizedText::Plain(value)),
            "abstract" => self.abstract_text = Some(LocalizedText::Plain(value)),
            "authors" => self.authors = split_author_field(&value),
            "keywords" => self.keywords = split_keyword_field(&value),
            "year" => match value.trim().parse::<i32>() {
                Ok(y) => self.year = Some(y),
                Err(_) => self.raw_year = Some(value),
            },
            "journal" => self.journal = Some(value),
            "conference" => self.conference = Some(value),
            "book_title" => self.book_title = Some(value),
            "school" => self.school = Some(value),
            "how_published" => self.how_published = Some(value),
            "month" => self.month = Some(value),
            "volume" => self.volume = Some(value),
            "issue" => self.issue = Some(value),
            "pages" => self.pages = Some(value),
            "publisher" => self.publisher = Some(value),
            "address" => self.address = Some(value),
            "edition" => self.edition = Some(value),
            "series" => self.series = Some(value),
            "chapter" => self.chapter = Some(value),
            "institution" => self.institution = Some(value),
            "organization" => self.organization = Some(value),
            "editor" => self.editor = Some(value),
            "note" => self.note = Some(value),
            "thesis_type" => self.thesis_type = Some(value),
            "language" => self.language = Some(value),
            "doi" => self.doi = Some(value),
            "url" => self.url = Some(value),
            "isbn" => self.isbn = Some(value),
            "issn" => self.issn = Some(value),
            "arxiv_id" => self.arxiv_id = Some(value),
            "pmid" => self.pmid = Some(value),
            "pmcid" => self.pmcid = Some(value),
            "code_url" => self.code_url = Some(value),
            "data_url" => self.data_url = Some(value),
            "slides_url" => self.slides_url = Some(value),
            "video_url" => self.video_url = Some(value),
            "poster_url" => self.poster_url = Some(value),
            "blog_url" => self.blog_url = Some(value),
            "press_url" => self.press_url = Some(value),
            "award" => self.award = Some(value),
            "impact_factor" => self.impact_factor = Some(value),
            "citation_count" => self.citation_count = Some(value),
            "altmetric_score" => self.altmetric_score = Some(value),
            "research_area" => self.research_area = Some(value),
            "funding" => self.funding = Some(value),
            "collaborators" => self.collaborators = Some(value),
            "student_authors" => self.student_authors = Some(value),
            "corresponding_author" => self.corresponding_author = Some(value),
            "equal_contribution" => self.equal_contribution = Some(value),
            "copyright" => self.copyright = Some(value),
            "license" => self.license = Some(value),
            _ => {
                self.extra_fields.insert(name.to_string(), value);
            }
        }
    }

    /// Get a field value by internal attribute name, as serializer-ready
    /// text. Sequence fields are rejoined; empty values come back as `None`.
    pub fn get_field(&self, name: &str) -> Option<String> {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        match name {
            "title" => self
                .title
                .as_ref()
                .and_then(|t| t.resolve())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            "abstract" => self
                .abstract_text
                .as_ref()
                .and_then(|t| t.resolve())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            "authors" => {
                if self.authors.is_empty() {
                    None
                } else {
                    Some(join_author_field(&self.authors))
                }
            }
            "keywords" => {
                if self.keywords.is_empty() {
                    None
                } else {
                    Some(self.keywords.join(", "))
                }
            }
            "year" => self
                .year
                .map(|y| y.to_string())
                .or_else(|| non_empty(&self.raw_year)),
            "journal" => non_empty(&self.journal),
            "conference" => non_empty(&self.conference),
            "book_title" => non_empty(&self.book_title),
            "school" => non_empty(&self.school),
            "how_published" => non_empty(&self.how_published),
            "month" => non_empty(&self.month),
            "volume" => non_empty(&self.volume),
            "issue" => non_empty(&self.issue),
            "pages" => non_empty(&self.pages),
            "publisher" => non_empty(&self.publisher),
            "address" => non_empty(&self.address),
            "edition" => non_empty(&self.edition),
            "series" => non_empty(&self.series),
            "chapter" => non_empty(&self.chapter),
            "institution" => non_empty(&self.institution),
            "organization" => non_empty(&self.organization),
            "editor" => non_empty(&self.editor),
            "note" => non_empty(&self.note),
            "thesis_type" => non_empty(&self.thesis_type),
            "language" => non_empty(&self.language),
            "doi" => non_empty(&self.doi),
            "url" => non_empty(&self.url),
            "isbn" => non_empty(&self.isbn),
            "issn" => non_empty(&self.issn),
            "arxiv_id" => non_empty(&self.arxiv_id),
            "pmid" => non_empty(&self.pmid),
            "pmcid" => non_empty(&self.pmcid),
            "code_url" => non_empty(&self.code_url),
            "data_url" => non_empty(&self.data_url),
            "slides_url" => non_empty(&self.slides_url),
            "video_url" => non_empty(&self.video_url),
            "poster_url" => non_empty(&self.poster_url),
            "blog_url" => non_empty(&self.blog_url),
            "press_url" => non_empty(&self.press_url),
            "award" => non_empty(&self.award),
            "impact_factor" => non_empty(&self.impact_factor),
            "citation_count" => non_empty(&self.citation_count),
            "altmetric_score" => non_empty(&self.altmetric_score),
            "research_area" => non_empty(&self.research_area),
            "funding" => non_empty(&self.funding),
            "collaborators" => non_empty(&self.collaborators),
            "student_authors" => non_empty(&self.student_authors),
            "corresponding_author" => non_empty(&self.corresponding_author),
            "equal_contribution" => non_empty(&self.equal_contribution),
            "copyright" => non_empty(&self.copyright),
            "license" => non_empty(&self.license),
            _ => self.extra_fields.get(name).cloned().filter(|s| !s.is_empty()),
        }
    }

    /// Derive the computed display fields. Called once after field mapping;
    /// idempotent. An existing explicit `url` is never overwritten by the
    /// DOI/arXiv synthesis.
    pub fn derive_computed(&mut self) {
        self.display_title = self
            .title
            .as_ref()
            .and_then(|t| t.resolve())
            .map(str::to_string);
        self.author_string = join_author_names(&self.authors);
        self.display_venue = self.venue();

        if self.url.is_none() {
            if let Some(doi) = &self.doi {
                self.url = Some(identifier_url(LinkKind::Doi, doi));
            } else if let Some(arxiv) = &self.arxiv_id {
                self.url = Some(identifier_url(LinkKind::Arxiv, arxiv));
            }
        }
    }

    /// Single display venue, chosen by priority:
    /// journal > conference > booktitle > school > howpublished.
    fn venue(&self) -> String {
        if let Some(j) = &self.journal {
            return j.clone();
        }
        if let Some(c) = &self.conference {
            return c.clone();
        }
        if let Some(b) = &self.book_title {
            return b.clone();
        }
        if let Some(s) = &self.school {
            return format!("PhD Thesis, {}", s);
        }
        if let Some(h) = &self.how_published {
            return h.clone();
        }
        "Unknown Venue".to_string()
    }
}

/// Split a keyword field on commas or semicolons, trimming each entry and
/// dropping empties. No deduplication.
pub fn split_keyword_field(field: &str) -> Vec<String> {
    field
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
