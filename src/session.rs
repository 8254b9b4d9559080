use crate::person::{SearchField, CANONICAL_FIELDS};
use crate::results::SearchResults;
use crate::store::Directory;

/// All state behind one interactive view of the directory.
///
/// Two transitions change it, each triggered explicitly by the caller:
/// [`settle`](Session::settle) when the load finishes, and
/// [`submit`](Session::submit) when the user asks for a search. Typing
/// ([`set_query`](Session::set_query)) only edits the input text.
#[derive(Debug)]
pub struct Session {
    loading:   bool,
    directory: Option<Directory>,
    fields:    Vec<SearchField>,
    query:     String,
    results:   SearchResults,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session whose load has not settled yet.
    pub fn new() -> Self {
        Self {
            loading:   true,
            directory: None,
            fields:    CANONICAL_FIELDS.to_vec(),
            query:     String::new(),
            results:   SearchResults::not_performed(),
        }
    }

    /// Match against `fields` instead of every canonical field.
    pub fn with_fields(mut self, fields: Vec<SearchField>) -> Self {
        self.fields = fields;
        self
    }

    /// Finish loading with `directory`, real or fallback.
    pub fn settle(&mut self, directory: Directory) {
        self.directory = Some(directory);
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Advisory notice from the load, if any. Never a fatal state.
    pub fn error(&self) -> Option<&str> {
        self.directory.as_ref().and_then(Directory::notice)
    }

    pub fn directory(&self) -> Option<&Directory> {
        self.directory.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Replace the input text without searching.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Search for the current input text and keep the result.
    ///
    /// Before the load settles there is nothing to search, so the result is
    /// not performed.
    pub fn submit(&mut self) -> &SearchResults {
        self.results = match &self.directory {
            Some(dir) => crate::search(dir.records())
                .query(self.query.as_str())
                .fields(&self.fields)
                .run(),
            None      => SearchResults::not_performed(),
        };
        &self.results
    }

    /// Drop both the input text and the current results.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results = SearchResults::not_performed();
    }
}
