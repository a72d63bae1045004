use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::batch::BatchOptions;
use crate::catalog::DEFAULT_BASE_DIR;
use crate::fetcher::DEFAULT_TIMEOUT;

fn default_base_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_DIR)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_jobs() -> usize {
    1
}

/// Optional configuration loaded from `~/.config/revdocs/config.toml`.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevdocsConfig {
    /// Output root for documents and `EXTERNAL_LINKS.md`.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// Per-request network timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Fetches in flight at once; 1 keeps the run strictly sequential.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for RevdocsConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            timeout_secs: default_timeout_secs(),
            jobs: default_jobs(),
        }
    }
}

impl RevdocsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Batch options derived from this config (fail-fast).
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            base_dir: self.base_dir.clone(),
            timeout: self.timeout(),
            jobs: self.jobs.max(1),
            keep_going: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("revdocs")?;
    Ok(xdg_dirs.get_config_home().join("revdocs").join("config.toml"))
}

/// Load configuration from `path`; a missing file yields the defaults.
/// The file is never created.
pub fn load_from(path: &Path) -> Result<RevdocsConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(RevdocsConfig::default());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: RevdocsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config location. If that location cannot
/// be resolved (e.g. no `HOME`), the defaults are used.
pub fn load() -> Result<RevdocsConfig> {
    match config_path() {
        Ok(path) => load_from(&path),
        Err(e) => {
            tracing::warn!("config location unavailable, using defaults: {:#}", e);
            Ok(RevdocsConfig::default())
        }
    }
}
