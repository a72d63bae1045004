//! `revdocs links` – write EXTERNAL_LINKS.md only.

use anyhow::Result;
use revdocs_core::config::RevdocsConfig;
use revdocs_core::links;
use std::path::Path;

use super::base_dir;

pub fn run_links(cfg: &RevdocsConfig, out_dir: Option<&Path>) -> Result<()> {
    let path = links::write_external_links(&base_dir(cfg, out_dir))?;
    println!("Wrote {}", path.display());
    Ok(())
}
