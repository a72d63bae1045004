//! Bounded worker pool: up to `jobs` blocking fetches in flight.
//!
//! When one finishes, the next URL is started until the list is exhausted.
//! In fail-fast mode the first error stops new fetches; fetches already in
//! flight are allowed to finish before the error is returned.

use tokio::task::JoinSet;

use super::{BatchFailure, BatchReport};
use crate::error::FetchError;
use crate::fetcher::{self, FetchOptions, FetchOutcome};

pub(super) async fn run_parallel(
    urls: &[String],
    opts: &FetchOptions,
    jobs: usize,
    keep_going: bool,
) -> Result<BatchReport, FetchError> {
    let jobs = jobs.max(1);
    let mut join_set: JoinSet<(usize, Result<FetchOutcome, FetchError>)> = JoinSet::new();
    let mut next = 0usize;
    let mut fetched: Vec<(usize, FetchOutcome)> = Vec::new();
    let mut failures: Vec<(usize, BatchFailure)> = Vec::new();
    let mut first_error: Option<FetchError> = None;

    loop {
        while first_error.is_none() && join_set.len() < jobs && next < urls.len() {
            let idx = next;
            next += 1;
            let url = urls[idx].clone();
            let opts = opts.clone();
            join_set.spawn_blocking(move || (idx, fetcher::fetch_and_save(&url, &opts)));
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let (idx, result) = res.map_err(|e| FetchError::Worker {
            reason: e.to_string(),
        })?;
        match result {
            Ok(outcome) => fetched.push((idx, outcome)),
            Err(error) if keep_going => {
                tracing::warn!("{} failed, continuing: {}", urls[idx], error);
                failures.push((
                    idx,
                    BatchFailure {
                        url: urls[idx].clone(),
                        error,
                    },
                ));
            }
            Err(error) => {
                tracing::error!("{} failed, draining in-flight fetches: {}", urls[idx], error);
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
    }

    if let Some(error) = first_error {
        return Err(error);
    }

    fetched.sort_by_key(|(i, _)| *i);
    failures.sort_by_key(|(i, _)| *i);
    Ok(BatchReport {
        fetched: fetched.into_iter().map(|(_, o)| o).collect(),
        failures: failures.into_iter().map(|(_, f)| f).collect(),
    })
}
