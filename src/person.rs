use serde::Serialize;

/// One person's directory entry.
///
/// Every field is a plain `String`. A column that is absent or empty in the
/// source row is stored as `""`, never as a missing value. Records carry no
/// identity: duplicates are legal and keep their load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Display name.
    pub name: String,

    /// Institution or organisation the person belongs to.
    pub affiliation: String,

    /// First expertise tag.
    pub keyword1: String,

    /// Second expertise tag.
    pub keyword2: String,

    /// Third expertise tag.
    pub keyword3: String,
}

impl Person {
    /// Build a record from its five columns.
    pub fn new(
        name:        impl Into<String>,
        affiliation: impl Into<String>,
        keyword1:    impl Into<String>,
        keyword2:    impl Into<String>,
        keyword3:    impl Into<String>,
    ) -> Self {
        Self {
            name:        name.into(),
            affiliation: affiliation.into(),
            keyword1:    keyword1.into(),
            keyword2:    keyword2.into(),
            keyword3:    keyword3.into(),
        }
    }

    /// The value stored under `field`.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name        => &self.name,
            SearchField::Affiliation => &self.affiliation,
            SearchField::Keyword1    => &self.keyword1,
            SearchField::Keyword2    => &self.keyword2,
            SearchField::Keyword3    => &self.keyword3,
        }
    }

    /// Non-empty keywords in column order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        [&self.keyword1, &self.keyword2, &self.keyword3]
            .into_iter()
            .map(String::as_str)
            .filter(|k| !k.is_empty())
    }
}

/// A named column of a [`Person`].
///
/// Matching works over an explicit list of these rather than a hardcoded
/// set of struct fields, so the searched columns are visible at every call
/// site and can be asserted on in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Affiliation,
    Keyword1,
    Keyword2,
    Keyword3,
}

impl SearchField {
    /// The header name this field is read from.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name        => "name",
            Self::Affiliation => "affiliation",
            Self::Keyword1    => "keyword1",
            Self::Keyword2    => "keyword2",
            Self::Keyword3    => "keyword3",
        }
    }

    /// Look a field up by header name (trimmed, case-insensitive).
    pub fn from_column(column: &str) -> Option<Self> {
        let column = column.trim();
        CANONICAL_FIELDS
            .iter()
            .copied()
            .find(|f| f.column().eq_ignore_ascii_case(column))
    }
}

/// The fields a query is matched against by default: all five columns.
///
/// `Affiliation` is included. Searching name and keywords only is an older,
/// narrower behaviour; pass an explicit field list to get it back.
pub const CANONICAL_FIELDS: &[SearchField] = &[
    SearchField::Name,
    SearchField::Affiliation,
    SearchField::Keyword1,
    SearchField::Keyword2,
    SearchField::Keyword3,
];
