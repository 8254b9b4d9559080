use std::path::PathBuf;

use tracing::debug;

use crate::error::LoadError;
use crate::traits::Source;

/// Where the directory table lives when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "data/experts.csv";

/// Pick a source for a location string: `http://` and `https://` locations
/// are fetched over the network, everything else is read as a file path.
pub fn from_location(location: &str) -> Box<dyn Source> {
    let lower = location.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpSource::new(location.trim()))
    } else {
        Box::new(FileSource::new(location))
    }
}

// ---------------------------------------------------------------------------
// FileSource
// ---------------------------------------------------------------------------

/// Reads the table from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for FileSource {
    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        debug!(path = %self.path.display(), "reading directory file");
        std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ---------------------------------------------------------------------------
// HttpSource
// ---------------------------------------------------------------------------

/// Fetches the table with a blocking HTTP GET.
///
/// Any non-2xx status is a load failure; the body of an error page is never
/// handed to the parser.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Source for HttpSource {
    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        debug!(url = %self.url, "fetching directory over http");
        let http = |source| LoadError::Http {
            url: self.url.clone(),
            source,
        };

        let response = reqwest::blocking::get(&self.url).map_err(http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url:    self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(http)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// ---------------------------------------------------------------------------
// TextSource
// ---------------------------------------------------------------------------

/// An in-memory table. Handy for embedding data and for tests.
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Source for TextSource {
    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.text.as_bytes().to_vec())
    }

    fn describe(&self) -> String {
        "in-memory table".into()
    }
}
