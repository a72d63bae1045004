//! Batch runner: fetch every URL, sequentially or with a bounded pool.
//!
//! Default behavior is fail fast: the first error ends the batch, files
//! already written stay in place and later URLs are not fetched. With
//! `keep_going`, failures are collected in the report instead.

mod parallel;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::DEFAULT_BASE_DIR;
use crate::error::FetchError;
use crate::fetcher::{self, FetchOptions, FetchOutcome, DEFAULT_TIMEOUT};
use crate::url_model::Destination;

/// How to run a batch.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub base_dir: PathBuf,
    pub timeout: Duration,
    /// Maximum fetches in flight. 1 = strictly sequential.
    pub jobs: usize,
    /// Record per-URL failures and continue instead of aborting.
    pub keep_going: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            timeout: DEFAULT_TIMEOUT,
            jobs: 1,
            keep_going: false,
        }
    }
}

impl BatchOptions {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            base_dir: self.base_dir.clone(),
            timeout: self.timeout,
        }
    }
}

/// A URL that failed in a `keep_going` batch.
#[derive(Debug)]
pub struct BatchFailure {
    pub url: String,
    pub error: FetchError,
}

/// Result of a batch. `fetched` and `failures` are in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub fetched: Vec<FetchOutcome>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.fetched.iter().map(|o| o.bytes).sum()
    }
}

/// Resolves every destination without touching network or disk.
/// Fails on the first URL with no usable path segment.
pub fn plan_destinations(
    urls: &[String],
    base_dir: &Path,
) -> Result<Vec<(String, Destination)>, FetchError> {
    urls.iter()
        .map(|u| Destination::resolve(base_dir, u).map(|d| (u.clone(), d)))
        .collect()
}

/// Fetches all `urls` according to `opts`.
///
/// Returns `Err` with the first failure unless `opts.keep_going` is set.
pub async fn run_batch(urls: &[String], opts: &BatchOptions) -> Result<BatchReport, FetchError> {
    let fetch_opts = opts.fetch_options();
    tracing::info!(
        "batch start: {} urls, jobs={}, keep_going={}, base_dir={}",
        urls.len(),
        opts.jobs,
        opts.keep_going,
        opts.base_dir.display()
    );
    let report = if opts.jobs <= 1 {
        run_sequential(urls, &fetch_opts, opts.keep_going).await?
    } else {
        parallel::run_parallel(urls, &fetch_opts, opts.jobs, opts.keep_going).await?
    };
    tracing::info!(
        "batch done: {} fetched ({} bytes), {} failed",
        report.fetched.len(),
        report.total_bytes(),
        report.failures.len()
    );
    Ok(report)
}

/// Each URL runs to completion (network and write) before the next starts.
async fn run_sequential(
    urls: &[String],
    opts: &FetchOptions,
    keep_going: bool,
) -> Result<BatchReport, FetchError> {
    let mut report = BatchReport::default();
    for url in urls {
        match fetch_blocking(url.clone(), opts.clone()).await {
            Ok(outcome) => report.fetched.push(outcome),
            Err(error) if keep_going => {
                tracing::warn!("{} failed, continuing: {}", url, error);
                report.failures.push(BatchFailure {
                    url: url.clone(),
                    error,
                });
            }
            Err(error) => {
                tracing::error!("{} failed, aborting batch: {}", url, error);
                return Err(error);
            }
        }
    }
    Ok(report)
}

async fn fetch_blocking(url: String, opts: FetchOptions) -> Result<FetchOutcome, FetchError> {
    tokio::task::spawn_blocking(move || fetcher::fetch_and_save(&url, &opts))
        .await
        .map_err(|e| FetchError::Worker {
            reason: e.to_string(),
        })?
}
