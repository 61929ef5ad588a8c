//! Entry extraction from citation-markup text
//!
//! Splits a raw document into typed, keyed entries with an unparsed body.
//! Brace matching uses an explicit depth counter, so arbitrarily nested
//! field values terminate the entry at the true closing brace. Comments
//! are stripped for scanning only; reported line numbers and the verbatim
//! entry text always refer to the document the caller passed in.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    IResult,
};

/// One extracted entry, body still unparsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub entry_type: String,
    pub citation_key: String,
    pub body: String,
    /// Verbatim slice of the source document for this entry, from `@` to
    /// its closing brace, comments included
    pub raw_markup: String,
}

/// A construct that looked like an entry but could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    /// 1-based line in the source document
    pub line: u32,
    pub message: String,
}

/// Result of a strict scan: extracted entries plus extraction misses
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub entries: Vec<RawEntry>,
    pub errors: Vec<ScanError>,
}

/// Extract every well-formed entry, in document order. Malformed
/// constructs are skipped silently; duplicates are not collapsed.
pub fn extract_entries(document: &str) -> Vec<RawEntry> {
    scan(document).entries
}

/// Like [`extract_entries`], but reports each skipped construct with its
/// line number instead of dropping it silently.
pub fn extract_entries_strict(document: &str) -> ScanResult {
    scan(document)
}

fn scan(document: &str) -> ScanResult {
    let map = SourceMap::new(document);
    let text = map.stripped();
    let mut result = ScanResult::default();
    let mut offset = 0usize;

    while let Some(found) = text[offset..].find('@') {
        let at = offset + found;
        match parse_at_entry(&text[at..]) {
            Ok((rest, (entry_type, citation_key, body))) => {
                let end = text.len() - rest.len();
                result.entries.push(RawEntry {
                    entry_type,
                    citation_key,
                    body,
                    raw_markup: map.original_span(at, end).to_string(),
                });
                offset = end;
            }
            Err(_) => {
                result.errors.push(ScanError {
                    line: map.line_of(at),
                    message: "malformed or unterminated entry".to_string(),
                });
                // Skip this '@' and resume at the next one
                offset = at + 1;
            }
        }
    }

    result
}

/// Parse one `@type{key, body}` construct into its parts
fn parse_at_entry(input: &str) -> IResult<&str, (String, String, String)> {
    let (rest, _) = char('@')(input)?;
    let (rest, entry_type) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, inner) = braced_content(rest)?;

    // Key runs to the first comma; everything after is the field body.
    let (citation_key, body) = match inner.find(',') {
        Some(p) => (inner[..p].trim(), &inner[p + 1..]),
        None => (inner.trim(), ""),
    };

    Ok((
        rest,
        (
            entry_type.to_string(),
            citation_key.to_string(),
            body.to_string(),
        ),
    ))
}

/// Parse a `{...}` group with depth counting, returning the inner text
/// (outer braces stripped) and the input after the closing brace.
/// Backslash-escaped braces do not affect the depth.
pub(crate) fn braced_content(input: &str) -> IResult<&str, &str> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'{') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let mut depth = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[pos + 1..], &input[1..pos]));
                }
            }
            b'\\' => {
                pos += 1;
            }
            _ => {}
        }
        pos += 1;
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Comment-stripped view of a document that maps scan positions back to
/// the source text.
///
/// Every line of the input is kept, blank or not, and each stripped line
/// is a prefix of its source line. Line numbers in the stripped text
/// therefore equal line numbers in the source, and any content byte maps
/// back by line and column.
struct SourceMap<'a> {
    document: &'a str,
    stripped: String,
    /// Per line: offset of the line start in `stripped` and in `document`
    line_starts: Vec<(usize, usize)>,
}

impl<'a> SourceMap<'a> {
    fn new(document: &'a str) -> Self {
        let mut stripped = String::with_capacity(document.len());
        let mut line_starts = Vec::new();
        let mut original_offset = 0;

        for line in document.split_inclusive('\n') {
            line_starts.push((stripped.len(), original_offset));
            let content = line.strip_suffix('\n').unwrap_or(line);
            stripped.push_str(strip_line_comment(content));
            if content.len() != line.len() {
                stripped.push('\n');
            }
            original_offset += line.len();
        }

        Self {
            document,
            stripped,
            line_starts,
        }
    }

    fn stripped(&self) -> &str {
        &self.stripped
    }

    /// 1-based line number of a content byte of the stripped text
    fn line_of(&self, offset: usize) -> u32 {
        self.line_starts.partition_point(|&(start, _)| start <= offset) as u32
    }

    /// Source offset of a content byte of the stripped text. Content
    /// bytes only; the newline of a commented line sits at a different
    /// column in the source.
    fn source_offset(&self, offset: usize) -> usize {
        let idx = self.line_starts.partition_point(|&(start, _)| start <= offset) - 1;
        let (stripped_start, original_start) = self.line_starts[idx];
        original_start + (offset - stripped_start)
    }

    /// Verbatim slice of the source document covering the stripped span
    /// `start..end`, comments included. The span must begin and end on
    /// content bytes, which entry spans do: `@` first, `}` last.
    fn original_span(&self, start: usize, end: usize) -> &'a str {
        let from = self.source_offset(start);
        let to = self.source_offset(end - 1) + 1;
        &self.document[from..to]
    }
}

fn strip_line_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'%' => return &line[..i],
            _ => i += 1,
        }
    }
    line
}
