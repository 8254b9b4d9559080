use crate::engine::{run, EngineOptions, FieldMatcher};
use crate::person::{Person, SearchField, CANONICAL_FIELDS};
use crate::results::SearchResults;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// A query against a borrowed record set, plus the knobs that shape it.
///
/// Get one from [`expertdir::search()`](crate::search). By default the query
/// is matched against every field in [`CANONICAL_FIELDS`]; narrow that with
/// [`fields`](SearchBuilder::fields) or replace the test outright with
/// [`with_matcher`](SearchBuilder::with_matcher). Nothing is searched until
/// [`run()`](SearchBuilder::run).
///
/// # Example
///
/// ```rust
/// use expertdir::{fallback, SearchField};
///
/// let people  = fallback::records();
/// let results = expertdir::search(&people)
///     .query("robotics")
///     .fields(&[SearchField::Keyword1, SearchField::Keyword2, SearchField::Keyword3])
///     .run();
///
/// assert!(results.performed);
/// assert_eq!(results.matches[0].name, "John Smith");
/// ```
pub struct SearchBuilder<'a> {
    records: &'a [Person],
    query:   String,
    fields:  &'a [SearchField],
    matcher: Option<Box<dyn Matcher + 'a>>,
    limit:   Option<usize>,
}

impl<'a> SearchBuilder<'a> {
    pub(crate) fn new(records: &'a [Person]) -> Self {
        Self {
            records,
            query:   String::new(),
            fields:  CANONICAL_FIELDS,
            matcher: None,
            limit:   None,
        }
    }

    // ── Query ─────────────────────────────────────────────────────────────

    /// The free-text query. Trimmed and lowercased before matching; a blank
    /// query yields a not-performed result.
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    // ── Matcher ───────────────────────────────────────────────────────────

    /// Restrict substring matching to these fields.
    ///
    /// Defaults to [`CANONICAL_FIELDS`]. Ignored when a custom matcher is set.
    pub fn fields(mut self, fields: &'a [SearchField]) -> Self {
        self.fields = fields;
        self
    }

    /// Set a custom matcher.
    ///
    /// The query still decides whether a search is performed at all; the
    /// matcher only sees records once the query is known to be non-blank.
    pub fn with_matcher(mut self, m: impl Matcher + 'a) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Stop after `n` matches.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search.
    ///
    /// Never fails: an empty query is not an error, and a query nothing
    /// matches is a performed search with no results.
    pub fn run(self) -> SearchResults {
        let matcher: Box<dyn Matcher + 'a> = match self.matcher {
            Some(m) => m,
            None    => Box::new(FieldMatcher::new(&self.query, self.fields)),
        };

        let opts = EngineOptions {
            query: self.query,
            matcher,
            limit: self.limit,
        };

        run(self.records, opts)
    }
}
