//! Fetch one document URL and save it under the base directory.
//!
//! Order of work per URL: resolve destination (no I/O), create the folder,
//! print the progress line, GET, write. Input errors therefore surface before
//! any network activity for that URL.

mod http;

pub use http::http_get;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::DEFAULT_BASE_DIR;
use crate::checksum;
use crate::error::FetchError;
use crate::storage;
use crate::url_model::Destination;

/// Fixed per-request network timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to write and how long to wait on the network.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub base_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// What a successful fetch wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub url: String,
    pub path: PathBuf,
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the body.
    pub sha256: String,
}

/// The user-facing progress line for one URL.
pub fn progress_line(url: &str, path: &Path) -> String {
    format!("Fetching {} -> {}", url, path.display())
}

/// Fetches `url` and writes the body to `<base>/<segment>/index.<ext>`,
/// replacing any existing file.
pub fn fetch_and_save(url: &str, opts: &FetchOptions) -> Result<FetchOutcome, FetchError> {
    let dest = Destination::resolve(&opts.base_dir, url)?;
    storage::ensure_dir(&dest.dir)?;

    println!("{}", progress_line(url, &dest.file));
    tracing::info!("fetching {} -> {}", url, dest.file.display());

    let body = http_get(url, opts.timeout)?;
    storage::write_replace(&dest.file, &body)?;

    let outcome = FetchOutcome {
        url: url.to_string(),
        path: dest.file,
        bytes: body.len() as u64,
        sha256: checksum::sha256_bytes(&body),
    };
    tracing::debug!(
        "saved {} ({} bytes, sha256={})",
        outcome.path.display(),
        outcome.bytes,
        outcome.sha256
    );
    Ok(outcome)
}
