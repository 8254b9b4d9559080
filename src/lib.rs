//! # expertdir
//!
//! Expert directory search: load a people table once, then filter it by
//! free text.
//!
//! expertdir loads a table of people (name, affiliation, up to three keyword
//! tags) once, keeps it in memory, and answers case-insensitive substring
//! queries against it. If the table cannot be fetched or parsed, a built-in
//! sample directory takes its place and an advisory notice says why.
//!
//! # Quick Start
//!
//! ```rust
//! use expertdir::{Directory, TextSource};
//!
//! let csv = "name,affiliation,keyword1\n\
//!            Ada Lovelace,Analytical Society,Mathematics\n\
//!            Alan Turing,Bletchley Park,Cryptography\n";
//!
//! let dir = Directory::load(&TextSource::new(csv));
//! assert!(dir.notice().is_none());
//!
//! let results = dir.search("bletchley");
//! assert!(results.performed);
//! assert_eq!(results.matches[0].name, "Alan Turing");
//! ```
//!
//! # Fallback
//!
//! ```rust
//! use expertdir::{Directory, TextSource};
//!
//! let dir = Directory::load(&TextSource::new("<!DOCTYPE html><h1>Not Found</h1>"));
//! assert!(dir.is_fallback());
//! assert_eq!(dir.records().len(), 10);
//! assert!(dir.notice().is_some());
//! ```
//!
//! # Blank queries
//!
//! A blank query is not a search. It returns no matches with
//! `performed == false`, which is how callers tell "nothing asked" apart
//! from "nothing found".
//!
//! ```rust
//! let people = expertdir::fallback::records();
//!
//! let blank = expertdir::filter("   ", &people);
//! assert!(!blank.performed && blank.matches.is_empty());
//!
//! let miss = expertdir::filter("zzz-no-match", &people);
//! assert!(miss.performed && miss.matches.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod fallback;
pub mod parser;
pub mod render;
pub mod source;

mod builder;
mod engine;
mod error;
mod person;
mod results;
mod session;
mod store;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use engine::FieldMatcher;
pub use error::{LoadError, ParseError};
pub use parser::parse_records;
pub use person::{Person, SearchField, CANONICAL_FIELDS};
pub use results::{DirectoryStats, SearchResults};
pub use session::Session;
pub use source::{FileSource, HttpSource, TextSource, DEFAULT_SOURCE};
pub use store::{load, Directory};
pub use traits::{Matcher, Source};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] over `records`.
///
/// # Example
///
/// ```rust
/// let people = expertdir::fallback::records();
///
/// let results = expertdir::search(&people)
///     .query("University of Technology")
///     .run();
///
/// let names: Vec<_> = results.matches.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["John Smith", "James Brown"]);
/// ```
pub fn search(records: &[Person]) -> SearchBuilder<'_> {
    SearchBuilder::new(records)
}

/// Match `query` against every canonical field of `records`.
///
/// Shorthand for `search(records).query(query).run()`.
pub fn filter(query: &str, records: &[Person]) -> SearchResults {
    search(records).query(query).run()
}
