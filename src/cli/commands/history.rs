//! History command implementation.
//!
//! The `toolstamp history` command shows recorded build environments,
//! most recently recorded version first.

use std::path::{Path, PathBuf};

use crate::cli::args::HistoryArgs;
use crate::config::{load_config, TrackerConfig};
use crate::error::{Result, ToolstampError};
use crate::log::LogStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The history command implementation.
pub struct HistoryCommand {
    project_root: PathBuf,
    config_path: PathBuf,
    args: HistoryArgs,
}

impl HistoryCommand {
    /// Create a new history command.
    pub fn new(project_root: &Path, config_path: &Path, args: HistoryArgs) -> Self {
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
    pub fn args(&self) -> &HistoryArgs {
        &self.args
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // A log can be read without a config; fall back to the default path.
        let config = match load_config(&self.config_path) {
            Ok(c) => c,
            Err(ToolstampError::ConfigNotFound { .. }) => TrackerConfig::default(),
            Err(e) => return Err(e),
        };

        let store = LogStore::new(config.log_path(&self.project_root));
        let log = store
            .load()?
            .filtered(self.args.project_version.as_deref(), self.args.limit);

        if self.args.json {
            let json = serde_json::to_string_pretty(&log)
                .map_err(|e| anyhow::anyhow!("Failed to serialize build log: {}", e))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        if log.is_empty() {
            match &self.args.project_version {
                Some(v) => ui.message(&format!("No builds recorded for {}", v)),
                None => ui.message("No builds recorded yet."),
            }
            return Ok(CommandResult::success());
        }

        for (version, records) in log.iter() {
            ui.show_header(version);
            for (i, record) in records.iter().enumerate() {
                if records.len() > 1 {
                    ui.show_divider(&format!("record {} of {}", i + 1, records.len()));
                }
                display::show_record(ui, record);
            }
        }

        ui.message(&format!(
            "{} versions, {} records",
            log.len(),
            log.record_count()
        ));

        Ok(CommandResult::success())
    }
}
