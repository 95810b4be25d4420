//! Record command implementation.
//!
//! The `toolstamp record` command probes every trackable and files the
//! result under the project version in the build log.

use std::path::{Path, PathBuf};

use crate::cli::args::RecordArgs;
use crate::config::load_config;
use crate::error::{Result, ToolstampError};
use crate::log::LogStore;
use crate::project::resolve_version;
use crate::record::{FixedDirectory, SystemPlatform, VersionEntryBuilder};
use crate::stamp::stamp;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The record command implementation.
pub struct RecordCommand {
    project_root: PathBuf,
    config_path: PathBuf,
    args: RecordArgs,
}

impl RecordCommand {
    /// Create a new record command.
    pub fn new(project_root: &Path, config_path: &Path, args: RecordArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RecordArgs {
        &self.args
    }
}

impl Command for RecordCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.config_path) {
            Ok(c) => c,
            Err(ToolstampError::ConfigNotFound { .. }) => {
                ui.error("No configuration found. Run 'toolstamp init' first.");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let version = resolve_version(&self.project_root, self.args.project_version.as_deref())?;

        let store = LogStore::new(config.log_path(&self.project_root));
        let log = store.load()?;

        let platform = SystemPlatform;
        let builder = VersionEntryBuilder::system(
            &platform,
            &FixedDirectory(self.project_root.clone()),
            &config.settings,
        )?;
        let result = stamp(&config.trackables, &version, log, &builder);

        ui.show_header(&version);
        display::show_record(ui, &result.record);
        display::warn_missing(ui, &result.record);

        if self.args.dry_run {
            ui.message(&format!(
                "Dry run: {} not written",
                store.path().display()
            ));
        } else {
            store.save(&result.log)?;
        }

        if result.is_new() {
            ui.success(&format!("Recorded build environment for {}", version));
        } else {
            ui.success(&format!(
                "Build environment for {} already recorded",
                version
            ));
        }

        Ok(CommandResult::success())
    }
}
