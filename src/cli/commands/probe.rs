//! Probe command implementation.
//!
//! The `toolstamp probe` command shows what would be recorded, without
//! touching the build log.

use std::path::{Path, PathBuf};

use crate::cli::args::ProbeArgs;
use crate::config::load_config;
use crate::error::{Result, ToolstampError};
use crate::record::{FixedDirectory, SystemPlatform, VersionEntryBuilder};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The probe command implementation.
pub struct ProbeCommand {
    project_root: PathBuf,
    config_path: PathBuf,
    args: ProbeArgs,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(project_root: &Path, config_path: &Path, args: ProbeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ProbeArgs {
        &self.args
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.config_path) {
            Ok(c) => c,
            Err(ToolstampError::ConfigNotFound { .. }) => {
                ui.error("No configuration found. Run 'toolstamp init' first.");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let platform = SystemPlatform;
        let builder = VersionEntryBuilder::system(
            &platform,
            &FixedDirectory(self.project_root.clone()),
            &config.settings,
        )?;
        let record = builder.build(&config.trackables);

        if self.args.json {
            let json = serde_json::to_string_pretty(&record)
                .map_err(|e| anyhow::anyhow!("Failed to serialize record: {}", e))?;
            ui.raw(&json);
        } else {
            display::show_record(ui, &record);
            display::warn_missing(ui, &record);
            ui.message(&format!(
                "{} of {} tools found",
                record.executables.found_count(),
                record.executables.len()
            ));
        }

        Ok(CommandResult::success())
    }
}
