//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RecordArgs};
use crate::config::default_config_path;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    ///
    /// The config is read from `.toolstamp/config.yml` under the root.
    pub fn new(project_root: PathBuf) -> Self {
        let config_path = default_config_path(&project_root);
        Self {
            project_root,
            config_path,
        }
    }

    /// Read the config from `path` instead of the default location.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.config_path = path;
        }
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `record` with default args.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;
        let config = &self.config_path;

        match &cli.command {
            Some(Commands::Record(args)) => {
                super::record::RecordCommand::new(root, config, args.clone()).execute(ui)
            }
            Some(Commands::Probe(args)) => {
                super::probe::ProbeCommand::new(root, config, args.clone()).execute(ui)
            }
            Some(Commands::History(args)) => {
                super::history::HistoryCommand::new(root, config, args.clone()).execute(ui)
            }
            Some(Commands::Init(args)) => {
                super::init::InitCommand::new(config, args.clone()).execute(ui)
            }
            None => {
                super::record::RecordCommand::new(root, config, RecordArgs::default()).execute(ui)
            }
        }
    }
}
