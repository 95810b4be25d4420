//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolstamp - Record which tool versions produced each release.
#[derive(Debug, Parser)]
#[command(name = "toolstamp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .toolstamp/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe tools and record them under the project version (default)
    Record(RecordArgs),

    /// Probe tools and print the result without recording it
    Probe(ProbeArgs),

    /// Show recorded build environments
    History(HistoryArgs),

    /// Create a starter configuration
    Init(InitArgs),
}

/// Arguments for the `record` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RecordArgs {
    /// Version to record under (defaults to package.json or Cargo.toml)
    #[arg(long, env = "TOOLSTAMP_PROJECT_VERSION")]
    pub project_version: Option<String>,

    /// Probe and merge, but do not write the build log
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HistoryArgs {
    /// Only show this project version
    #[arg(long)]
    pub project_version: Option<String>,

    /// Show at most this many versions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}
