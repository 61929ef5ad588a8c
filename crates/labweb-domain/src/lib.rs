//! Publication domain types for the labweb site generator
//!
//! This crate provides the canonical domain model consumed by the bilingual
//! lab-website rendering layer:
//! - Publication: a normalized bibliographic record with display fields
//! - Author: ordered contributor with a downstream highlight flag
//! - LocalizedText: plain or per-language text (title, abstract)
//! - Link resolution: DOI/arXiv/PubMed landing-page URLs

pub mod author;
pub mod links;
pub mod localized;
pub mod record;

pub use author::*;
pub use links::*;
pub use localized::*;
pub use record::*;
