use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::ParseError;
use crate::person::{Person, SearchField, CANONICAL_FIELDS};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a delimited table with a header row into records.
///
/// Columns are located by header name, so their order in the input does not
/// matter and unknown columns are ignored. A row that lacks a column, or
/// leaves it blank, gets `""` for that field. Blank lines produce nothing.
///
/// # Errors
///
/// - [`ParseError::Empty`] when there is no header row at all.
/// - [`ParseError::NotTabular`] when the payload is markup (typically an
///   HTML error page served in place of the file).
/// - [`ParseError::UnknownHeader`] when the header names none of the
///   directory columns.
/// - [`ParseError::Malformed`] when a row cannot be decoded, or a quoted
///   field is still open at the end of the input.
pub fn parse_records(input: &[u8]) -> Result<Vec<Person>, ParseError> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    let body  = input.trim_ascii_start();

    if body.is_empty() {
        return Err(ParseError::Empty);
    }
    if body.starts_with(b"<") {
        return Err(ParseError::NotTabular);
    }
    // The reader swallows everything after an unclosed quote into one field.
    if let Some(line) = unclosed_quote(body) {
        return Err(ParseError::Malformed { line, source: None });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body);

    let headers = reader.headers().map_err(malformed)?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(malformed)?;
        if is_blank(&row) {
            continue;
        }
        records.push(columns.person(&row));
    }

    debug!(records = records.len(), "parsed directory table");
    Ok(records)
}

// ---------------------------------------------------------------------------
// ColumnMap
// ---------------------------------------------------------------------------

/// Header position of each directory column, if present.
struct ColumnMap {
    name:        Option<usize>,
    affiliation: Option<usize>,
    keyword1:    Option<usize>,
    keyword2:    Option<usize>,
    keyword3:    Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, ParseError> {
        // First occurrence wins when a header is repeated.
        let find = |field: SearchField| {
            headers
                .iter()
                .position(|h| SearchField::from_column(h) == Some(field))
        };

        let map = Self {
            name:        find(SearchField::Name),
            affiliation: find(SearchField::Affiliation),
            keyword1:    find(SearchField::Keyword1),
            keyword2:    find(SearchField::Keyword2),
            keyword3:    find(SearchField::Keyword3),
        };

        if CANONICAL_FIELDS.iter().all(|&f| map.index(f).is_none()) {
            return Err(ParseError::UnknownHeader(
                headers.iter().map(str::to_owned).collect(),
            ));
        }
        Ok(map)
    }

    fn index(&self, field: SearchField) -> Option<usize> {
        match field {
            SearchField::Name        => self.name,
            SearchField::Affiliation => self.affiliation,
            SearchField::Keyword1    => self.keyword1,
            SearchField::Keyword2    => self.keyword2,
            SearchField::Keyword3    => self.keyword3,
        }
    }

    fn person(&self, row: &StringRecord) -> Person {
        let get = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i)).unwrap_or_default().to_owned()
        };
        Person {
            name:        get(self.name),
            affiliation: get(self.affiliation),
            keyword1:    get(self.keyword1),
            keyword2:    get(self.keyword2),
            keyword3:    get(self.keyword3),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A line holding nothing but whitespace.
fn is_blank(row: &StringRecord) -> bool {
    row.len() <= 1 && row.iter().all(str::is_empty)
}

fn malformed(err: csv::Error) -> ParseError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    ParseError::Malformed { line, source: Some(err) }
}

/// Line of a quoted field that never closes, if any.
///
/// Follows the reader's quoting rules: a quote opens a field only at the
/// start of that field, `""` inside it is an escaped quote, and a quote in
/// the middle of an unquoted field is literal.
fn unclosed_quote(body: &[u8]) -> Option<u64> {
    let mut line        = 1;
    let mut open_at     = None;
    let mut field_start = true;
    let mut bytes       = body.iter().peekable();

    while let Some(&b) = bytes.next() {
        if open_at.is_some() {
            if b == b'"' {
                if bytes.peek() == Some(&&b'"') {
                    bytes.next();
                } else {
                    open_at = None;
                    field_start = false;
                }
            }
        } else {
            match b {
                b'"' if field_start       => open_at = Some(line),
                b',' | b'\n' | b'\r'      => field_start = true,
                _                         => field_start = false,
            }
        }
        if b == b'\n' {
            line += 1;
        }
    }
    open_at
}
