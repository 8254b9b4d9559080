use crate::error::LoadError;
use crate::person::Person;

/// Somewhere the raw directory table can be fetched from.
///
/// Implement this to load the directory from anything that yields bytes:
/// a local file, an HTTP endpoint, an embedded string, a test fixture.
/// The store calls [`fetch`](Source::fetch) exactly once per load and hands
/// the bytes to the record parser.
///
/// # Error Handling
///
/// Return `Err(LoadError)` for anything that prevents getting the bytes
/// (missing file, refused connection, non-success status). The store turns
/// every such error into the fallback dataset plus an advisory notice, so a
/// source never needs to invent placeholder content of its own.
///
/// # Example
///
/// ```rust
/// use expertdir::{LoadError, Source};
///
/// struct Inline(&'static str);
///
/// impl Source for Inline {
///     fn fetch(&self) -> Result<Vec<u8>, LoadError> {
///         Ok(self.0.as_bytes().to_vec())
///     }
///
///     fn describe(&self) -> String {
///         "inline table".into()
///     }
/// }
/// ```
pub trait Source {
    /// Fetch the complete raw table.
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Short human-readable label, used in logs and notices.
    fn describe(&self) -> String;
}

/// Determines whether a record belongs in the search results.
///
/// The built-in matcher is a case-insensitive substring test over a list of
/// fields (see [`FieldMatcher`](crate::FieldMatcher)). Implement this for
/// anything else, such as exact tag lookup.
///
/// Matchers only ever see non-empty queries: the engine handles the
/// blank-query case itself before any matcher runs.
///
/// # Example
///
/// ```rust
/// use expertdir::{Matcher, Person};
///
/// struct HasKeyword(String);
///
/// impl Matcher for HasKeyword {
///     fn is_match(&self, person: &Person) -> bool {
///         person.keywords().any(|k| k.eq_ignore_ascii_case(&self.0))
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if this record should be included in results.
    fn is_match(&self, person: &Person) -> bool;
}
