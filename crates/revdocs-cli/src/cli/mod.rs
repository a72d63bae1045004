//! CLI for revdocs.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use revdocs_core::config::{self, RevdocsConfig};
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_completions, run_fetch, run_links, run_man, run_plan};

/// Top-level CLI. With no subcommand, behaves like `revdocs fetch`.
#[derive(Debug, Parser)]
#[command(name = "revdocs")]
#[command(about = "Fetch the Revenova documentation set into a local directory tree", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/revdocs/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every document, then write EXTERNAL_LINKS.md (default command).
    Fetch(FetchArgs),

    /// Only write EXTERNAL_LINKS.md.
    Links {
        /// Output root (default: "docs/Revenova Docs").
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Print where each document would be written, without fetching.
    Plan {
        /// Output root (default: "docs/Revenova Docs").
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Compute SHA-256 of a file (e.g. a fetched document).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

#[derive(Debug, Default, Clone, Args)]
pub struct FetchArgs {
    /// Output root (default: "docs/Revenova Docs").
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Fetch up to N documents concurrently (default 1, strictly sequential).
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Per-request network timeout in seconds (default 30).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Continue past failed documents and report them at the end (exit status is still non-zero).
    #[arg(long)]
    pub keep_going: bool,

    /// Do not write EXTERNAL_LINKS.md.
    #[arg(long)]
    pub skip_links: bool,
}

/// Config from `--config` if given, else the XDG location.
/// Only commands that write documents load it.
fn load_config(path: Option<&Path>) -> Result<RevdocsConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        Cli::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let config_path = self.config.as_deref();

        match self.command.unwrap_or_else(|| CliCommand::Fetch(FetchArgs::default())) {
            CliCommand::Fetch(args) => run_fetch(&load_config(config_path)?, &args).await?,
            CliCommand::Links { out_dir } => {
                run_links(&load_config(config_path)?, out_dir.as_deref())?
            }
            CliCommand::Plan { out_dir } => {
                run_plan(&load_config(config_path)?, out_dir.as_deref())?
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
