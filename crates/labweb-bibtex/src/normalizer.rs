//! Field normalization: entry body → publication record
//!
//! Parses `name = {value}` assignments out of an entry body, maps markup
//! field names onto the record schema, applies the cleaning policy per
//! target attribute, and derives the computed display fields.

use crate::{fields, latex, scanner, RawEntry};
use labweb_domain::{PublicationRecord, PublicationType};

/// Normalize one extracted entry into a publication record.
///
/// Never fails: unparseable field assignments are absent from the record,
/// unknown field names pass through verbatim, unknown entry types degrade
/// to the catch-all type.
pub fn parse_entry(entry: &RawEntry) -> PublicationRecord {
    let mut record = PublicationRecord::new(
        entry.citation_key.clone(),
        PublicationType::from_entry_type(&entry.entry_type),
    );

    for (name, raw_value) in parse_fields(&entry.body, &entry.citation_key) {
        let cleaned = latex::clean_value(&raw_value);
        let (attr, mapped) = match fields::target_attr(&name) {
            Some(a) => (a, true),
            None => (name.as_str(), false),
        };

        // Identifiers and positional fields carry no typesetting markup;
        // titles, abstracts and unmapped textual fields get full stripping.
        let value = if fields::is_passthrough(attr) {
            cleaned
        } else if matches!(attr, "title" | "abstract") || !mapped {
            latex::strip_commands(&cleaned)
        } else {
            cleaned
        };

        record.set_field(attr, value);
    }

    record.raw_markup = Some(entry.raw_markup.clone());
    record.derive_computed();
    record
}

enum FieldMiss {
    /// Assignment does not match `name = {value}`
    Shape,
    /// Value brace group never closes; field name kept for the warning
    Unbalanced(String),
}

/// Parse every well-formed `name = {value}` assignment, in body order.
fn parse_fields(body: &str, citation_key: &str) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let mut remaining = body;

    loop {
        remaining = remaining.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if remaining.is_empty() {
            break;
        }

        match parse_single_field(remaining) {
            Ok((rest, (name, value))) => {
                fields.push((name, value));
                remaining = rest;
            }
            Err(FieldMiss::Unbalanced(name)) => {
                tracing::warn!(
                    entry = citation_key,
                    field = %name,
                    "unbalanced braces in field value; field dropped"
                );
                break;
            }
            Err(FieldMiss::Shape) => match skip_to_top_level_comma(remaining) {
                Some(rest) => {
                    tracing::debug!(entry = citation_key, "skipped non-matching field assignment");
                    remaining = rest;
                }
                None => break,
            },
        }
    }

    fields
}

fn parse_single_field(input: &str) -> Result<(&str, (String, String)), FieldMiss> {
    let name_end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(input.len());
    if name_end == 0 {
        return Err(FieldMiss::Shape);
    }
    let name = input[..name_end].to_lowercase();

    let rest = input[name_end..].trim_start();
    let Some(rest) = rest.strip_prefix('=') else {
        return Err(FieldMiss::Shape);
    };
    let rest = rest.trim_start();
    if !rest.starts_with('{') {
        return Err(FieldMiss::Shape);
    }

    match scanner::braced_content(rest) {
        Ok((after, inner)) => Ok((after, (name, inner.to_string()))),
        Err(_) => Err(FieldMiss::Unbalanced(name)),
    }
}

/// Skip past the next comma outside any brace group. `None` when the rest
/// of the body holds no further assignments.
fn skip_to_top_level_comma(input: &str) -> Option<&str> {
    let mut depth = 0usize;
    let bytes = input.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => return Some(&input[pos + 1..]),
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }
    None
}
