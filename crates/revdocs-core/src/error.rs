//! Error type for the fetch pipeline.
//!
//! Every variant is fatal for a default (fail-fast) batch run.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// URL could not be parsed as an absolute URL.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// URL path yields no usable folder name (e.g. `/` or empty path).
    #[error("cannot determine folder name from URL: {url}")]
    NoPathSegment { url: String },

    /// Curl reported an error (DNS, connect, timeout, ...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Response status outside 2xx.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },

    /// A blocking fetch task panicked or was cancelled.
    #[error("fetch worker did not complete: {reason}")]
    Worker { reason: String },

    /// Directory creation or file write failed.
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for errors raised before any network activity for the URL.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidUrl { .. } | FetchError::NoPathSegment { .. }
        )
    }
}
