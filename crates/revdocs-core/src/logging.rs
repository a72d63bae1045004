//! Tracing setup.
//!
//! Events go to `revdocs.log` in the XDG state directory. The CLI falls back
//! to [`init_logging_stderr`] when that file cannot be opened. `RUST_LOG`
//! overrides the default filter in both cases.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,revdocs=debug,revdocs_core=debug";
const LOG_FILE_NAME: &str = "revdocs.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/revdocs/revdocs.log` (or under `$XDG_STATE_HOME`).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("revdocs")?;
    Ok(xdg_dirs
        .get_state_home()
        .join("revdocs")
        .join(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating parent directories as needed.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs a file-backed subscriber. Errors leave no subscriber installed,
/// so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!("logging to {}", path.display());
    Ok(())
}

/// Installs a stderr subscriber; a no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
