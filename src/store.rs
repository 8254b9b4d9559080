use tracing::info;

use crate::error::LoadError;
use crate::fallback;
use crate::parser::parse_records;
use crate::person::Person;
use crate::results::{DirectoryStats, SearchResults};
use crate::traits::Source;

/// Fetch and parse the directory table from `source`.
///
/// This is the fallible half of a load. Most callers want
/// [`Directory::load`], which never fails.
pub fn load(source: &dyn Source) -> Result<Vec<Person>, LoadError> {
    let bytes = source.fetch()?;
    let records = parse_records(&bytes)?;
    Ok(records)
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// The loaded record set and its summary counts.
///
/// Built once; records are only ever handed out by shared reference.
#[derive(Debug, Clone)]
pub struct Directory {
    records:  Vec<Person>,
    stats:    DirectoryStats,
    notice:   Option<String>,
    fallback: bool,
}

impl Directory {
    /// Load from `source`, substituting the sample directory on any failure.
    pub fn load(source: &dyn Source) -> Self {
        let origin = source.describe();
        info!(source = %origin, "loading directory");
        Self::from_load(load(source))
    }

    /// Settle a load result.
    ///
    /// `Ok` keeps the parsed records as they are, even when there are none.
    /// `Err` is answered with the sample directory and an advisory notice
    /// naming the reason.
    pub fn from_load(result: Result<Vec<Person>, LoadError>) -> Self {
        match result {
            Ok(records) => {
                info!(records = records.len(), "directory loaded");
                Self::build(records, None, false)
            }
            Err(err) => {
                let reason = err.reason();
                info!(%reason, "directory load failed, using sample data");
                Self::build(fallback::records(), Some(advisory(&err)), true)
            }
        }
    }

    /// A directory over records that are already in memory.
    pub fn from_records(records: Vec<Person>) -> Self {
        Self::build(records, None, false)
    }

    fn build(records: Vec<Person>, notice: Option<String>, fallback: bool) -> Self {
        let stats = DirectoryStats::compute(&records);
        Self { records, stats, notice, fallback }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn records(&self) -> &[Person] {
        &self.records
    }

    pub fn stats(&self) -> DirectoryStats {
        self.stats
    }

    /// Advisory message set when the sample directory stands in for the
    /// real one. Informational only; the directory is fully usable.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Search all canonical fields for `query`.
    pub fn search(&self, query: &str) -> SearchResults {
        crate::search(&self.records).query(query).run()
    }
}

fn advisory(err: &LoadError) -> String {
    let what = if err.is_not_found() {
        "Expert data file not found".to_owned()
    } else {
        format!("Could not load expert data ({})", err.reason())
    };
    format!("{what}. Showing sample data instead.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::source::TextSource;

    #[test]
    fn good_source_has_no_notice() {
        let dir = Directory::load(&TextSource::new("name,affiliation\nAda,Lab\n"));

        assert!(!dir.is_fallback());
        assert!(dir.notice().is_none());
        assert_eq!(dir.records().len(), 1);
        assert_eq!(dir.stats().expert_count, 1);
    }

    #[test]
    fn markup_falls_back_with_notice() {
        let dir = Directory::load(&TextSource::new("<!DOCTYPE html><p>404</p>"));

        assert!(dir.is_fallback());
        assert_eq!(dir.records(), fallback::records().as_slice());
        let notice = dir.notice().unwrap();
        assert!(notice.contains("not tabular"), "{notice}");
        assert!(notice.ends_with("Showing sample data instead."));
    }

    #[test]
    fn not_found_gets_short_notice() {
        let err = LoadError::Io {
            path:   "data/experts.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let dir = Directory::from_load(Err(err));

        assert_eq!(
            dir.notice(),
            Some("Expert data file not found. Showing sample data instead.")
        );
    }

    #[test]
    fn header_only_source_is_empty_not_fallback() {
        let dir = Directory::from_load(Ok(Vec::new()));
        assert!(!dir.is_fallback());
        assert!(dir.records().is_empty());
    }

    #[test]
    fn stats_are_computed_on_fallback() {
        let dir = Directory::from_load(Err(ParseError::Empty.into()));
        assert_eq!(dir.stats().expert_count, fallback::LEN);
    }
}
