//! CLI for filefix.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filefix_core::config;
use filefix_core::usage::UsageLedger;
use filefix_core::CasingStyle;
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_preview, run_reset_usage, run_usage, run_zip, ZipRequest};

/// Top-level CLI for filefix.
#[derive(Debug, Parser)]
#[command(name = "filefix")]
#[command(about = "filefix: clean up file names and bundle them into one ZIP", long_about = None)]
pub struct Cli {
    /// Read configuration from PATH instead of ~/.config/filefix/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show how file names would be cleaned, without reading any files.
    Preview {
        /// Raw file names.
        #[arg(required = true)]
        names: Vec<String>,
        /// Casing style: lowercase, kebab, camel or pascal (default from config).
        #[arg(long, short)]
        style: Option<CasingStyle>,
    },

    /// Clean the names of the given files and write them into one ZIP archive.
    Zip {
        /// Files to include, in archive order.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Casing style: lowercase, kebab, camel or pascal (default from config).
        #[arg(long, short)]
        style: Option<CasingStyle>,
        /// Archive path (default: archive_name from config in the current directory).
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Caller email, used to look up the plan and the daily quota.
        #[arg(long, value_name = "EMAIL")]
        user: Option<String>,
    },

    /// Show today's usage against the free daily quota.
    Usage {
        /// Caller email.
        #[arg(long, value_name = "EMAIL")]
        user: Option<String>,
    },

    /// Forget the recorded usage for a caller.
    ResetUsage {
        /// Caller email.
        #[arg(long, value_name = "EMAIL")]
        user: Option<String>,
    },

    /// Compute SHA-256 of a file (e.g. a written archive).
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Preview { names, style } => {
                run_preview(&names, style.unwrap_or(cfg.default_style)).await?
            }
            CliCommand::Zip {
                paths,
                style,
                output,
                user,
            } => {
                let output = match output {
                    Some(p) => p,
                    None => std::env::current_dir()?.join(&cfg.archive_name),
                };
                let request = ZipRequest {
                    paths: &paths,
                    style: style.unwrap_or(cfg.default_style),
                    output: &output,
                    user: user.as_deref(),
                };
                run_zip(&cfg, &request, &UsageLedger::default_path()?).await?;
            }
            CliCommand::Usage { user } => {
                run_usage(&cfg, user.as_deref(), &UsageLedger::default_path()?).await?
            }
            CliCommand::ResetUsage { user } => {
                run_reset_usage(&cfg, user.as_deref(), &UsageLedger::default_path()?).await?
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path)).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
