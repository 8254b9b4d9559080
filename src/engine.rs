use crate::person::{Person, SearchField};
use crate::results::SearchResults;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions<'a> {
    pub query:   String,
    pub matcher: Box<dyn Matcher + 'a>,
    pub limit:   Option<usize>,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Filter `records` down to the ones the matcher accepts.
///
/// A blank query short-circuits to an empty, not-performed result without
/// consulting the matcher. Otherwise this is a stable filter: matches come
/// back in the order they appear in `records`, and `records` is untouched.
pub(crate) fn run(records: &[Person], opts: EngineOptions<'_>) -> SearchResults {
    let query = opts.query.trim();
    if query.is_empty() {
        return SearchResults::not_performed();
    }

    let take = opts.limit.unwrap_or(usize::MAX);
    let matches = records
        .iter()
        .filter(|p| opts.matcher.is_match(p))
        .take(take)
        .cloned()
        .collect();

    SearchResults {
        query: query.to_owned(),
        performed: true,
        matches,
    }
}

// ---------------------------------------------------------------------------
// FieldMatcher
// ---------------------------------------------------------------------------

/// Case-insensitive substring match over a list of fields.
///
/// The needle is trimmed and lowercased once at construction; each field is
/// lowercased per comparison. A record matches when any listed field
/// contains the needle.
pub struct FieldMatcher<'f> {
    needle: String,
    fields: &'f [SearchField],
}

impl<'f> FieldMatcher<'f> {
    pub fn new(query: &str, fields: &'f [SearchField]) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
            fields,
        }
    }
}

impl Matcher for FieldMatcher<'_> {
    fn is_match(&self, person: &Person) -> bool {
        self.fields
            .iter()
            .any(|&f| person.field(f).to_lowercase().contains(&self.needle))
    }
}
