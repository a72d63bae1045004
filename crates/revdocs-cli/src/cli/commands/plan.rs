//! `revdocs plan` – show destinations without touching the network.

use anyhow::Result;
use revdocs_core::batch;
use revdocs_core::catalog::{self, EXTERNAL_LINKS_FILE};
use revdocs_core::config::RevdocsConfig;
use std::path::Path;

use super::base_dir;

pub fn run_plan(cfg: &RevdocsConfig, out_dir: Option<&Path>) -> Result<()> {
    let base = base_dir(cfg, out_dir);
    let plan = batch::plan_destinations(&catalog::doc_urls(), &base)?;
    for (url, dest) in &plan {
        println!("{} -> {}", url, dest.file.display());
    }
    println!("(links) -> {}", base.join(EXTERNAL_LINKS_FILE).display());
    Ok(())
}
