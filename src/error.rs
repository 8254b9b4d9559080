use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

/// Why a blob of text could not be turned into records.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("input is markup, not tabular data")]
    NotTabular,

    #[error("header names none of the directory columns")]
    UnknownHeader(Vec<String>),

    #[error("malformed row near line {line}")]
    Malformed {
        line: u64,
        #[source]
        source: Option<csv::Error>,
    },
}

/// Why the directory source could not be loaded.
///
/// Every variant is recoverable: the store answers any of them with the
/// fallback dataset. None of them stops the directory from being browsable.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url:    String,
        status: u16,
    },

    #[error("could not parse directory data")]
    Parse(#[from] ParseError),
}

impl LoadError {
    /// Whether the source simply does not exist (missing file, HTTP 404).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. }  => source.kind() == std::io::ErrorKind::NotFound,
            Self::Status { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// A one-line, human-readable reason, including the underlying cause.
    ///
    /// `Display` on its own only describes the outermost layer; this walks
    /// the `source()` chain so the advisory notice says what actually broke.
    pub fn reason(&self) -> String {
        let mut out = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            out.push_str(": ");
            out.push_str(&err.to_string());
            cause = err.source();
        }
        out
    }
}
