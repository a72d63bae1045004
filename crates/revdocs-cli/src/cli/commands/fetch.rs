//! `revdocs fetch` – fetch the catalog, then write the links file.

use anyhow::Result;
use revdocs_core::batch::{self, BatchOptions};
use revdocs_core::catalog;
use revdocs_core::config::RevdocsConfig;
use revdocs_core::links;
use std::time::Duration;

use super::base_dir;
use crate::cli::FetchArgs;

impl FetchArgs {
    /// Merges command-line flags over the loaded config.
    pub(crate) fn batch_options(&self, cfg: &RevdocsConfig) -> BatchOptions {
        let mut opts = cfg.batch_options();
        opts.base_dir = base_dir(cfg, self.out_dir.as_deref());
        if let Some(jobs) = self.jobs {
            opts.jobs = jobs.max(1);
        }
        if let Some(secs) = self.timeout {
            opts.timeout = Duration::from_secs(secs);
        }
        opts.keep_going = self.keep_going;
        opts
    }
}

pub async fn run_fetch(cfg: &RevdocsConfig, args: &FetchArgs) -> Result<()> {
    let opts = args.batch_options(cfg);
    let urls = catalog::doc_urls();
    let report = batch::run_batch(&urls, &opts).await?;

    if !args.skip_links {
        links::write_external_links(&opts.base_dir)?;
    }

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("failed: {}: {}", failure.url, failure.error);
        }
        anyhow::bail!(
            "{} of {} documents failed",
            report.failures.len(),
            urls.len()
        );
    }

    tracing::info!(
        "fetched {} documents ({} bytes) into {}",
        report.fetched.len(),
        report.total_bytes(),
        opts.base_dir.display()
    );
    Ok(())
}
