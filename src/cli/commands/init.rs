//! Init command implementation.
//!
//! The `toolstamp init` command writes a starter configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::write_skeleton;
use crate::error::{Result, ToolstampError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    config_path: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command writing to `config_path`.
    pub fn new(config_path: &Path, args: InitArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match write_skeleton(&self.config_path, self.args.force) {
            Ok(()) => {}
            Err(ToolstampError::ConfigExists { path }) => {
                ui.error(&format!(
                    "Configuration already exists at {}. Use --force to overwrite.",
                    path.display()
                ));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        }

        ui.success(&format!("Created {}", self.config_path.display()));
        ui.message("Edit the trackables list, then run 'toolstamp record'.");
        Ok(CommandResult::success())
    }
}
