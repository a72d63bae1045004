//! CLI command handlers. Each command is in its own file.

mod checksum;
mod completions;
mod fetch;
mod links;
mod plan;

pub use checksum::run_checksum;
pub use completions::{run_completions, run_man};
pub use fetch::run_fetch;
pub use links::run_links;
pub use plan::run_plan;

use revdocs_core::config::RevdocsConfig;
use std::path::{Path, PathBuf};

/// `--out-dir` if given, else the configured base directory.
pub(crate) fn base_dir(cfg: &RevdocsConfig, out_dir: Option<&Path>) -> PathBuf {
    out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cfg.base_dir.clone())
}
