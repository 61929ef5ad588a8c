//! Markup regeneration from publication records
//!
//! The inverse transform from record back to canonical citation markup.
//! Output is deterministic: entry type from the mirror of the type table,
//! fields in the mapping-table order, extra fields after them, empty
//! values dropped.

use crate::fields::{markup_name, FIELD_MAP};
use labweb_domain::PublicationRecord;
use std::collections::HashSet;

/// Regenerate citation markup for one record.
///
/// Only attributes present and non-empty are emitted. Author lists are
/// rejoined with `" and "`, sequences with `", "`; `&`, `%` and `#` are
/// backslash-escaped. Feeding the output back through the parser yields a
/// record with the same type, author names, and scalar fields (highlight
/// flags are not part of the markup and are lost by design).
pub fn generate_markup(record: &PublicationRecord) -> String {
    let key = if record.citation_key.is_empty() {
        record.id.as_str()
    } else {
        record.citation_key.as_str()
    };

    let mut out = String::new();
    out.push('@');
    out.push_str(record.record_type.to_entry_type());
    out.push('{');
    out.push_str(key);

    let mut emitted: HashSet<&str> = HashSet::new();
    for &(_, attr) in FIELD_MAP {
        if !emitted.insert(attr) {
            continue;
        }
        if let Some(value) = record.get_field(attr) {
            // markup_name is total over table attributes
            let name = markup_name(attr).unwrap_or(attr);
            push_field(&mut out, name, &value);
        }
    }

    // Unknown-name passthrough fields, after the canonical vocabulary
    for (name, value) in &record.extra_fields {
        if !value.is_empty() {
            push_field(&mut out, name, value);
        }
    }

    out.push_str("\n}");
    out
}

/// Regenerate markup for a whole record sequence, blank-line separated.
pub fn generate_document(records: &[PublicationRecord]) -> String {
    records
        .iter()
        .map(generate_markup)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn push_field(out: &mut String, name: &str, value: &str) {
    out.push_str(",\n  ");
    out.push_str(name);
    out.push_str(" = {");
    out.push_str(&escape_value(value));
    out.push('}');
}

/// Minimum safe escaping for the markup format: `&`, `%`, `#`.
fn escape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' | '%' | '#' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
