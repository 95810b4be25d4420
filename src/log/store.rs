//! Build log persistence.
//!
//! The log is stored as pretty-printed JSON. Reading and writing go through
//! [`BuildLog`]'s own serde impls, so key order survives a round trip.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolstampError};

use super::BuildLog;

/// Reads and writes a build log file.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    /// Create a store for the log at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the log. A missing file is an empty log.
    pub fn load(&self) -> Result<BuildLog> {
        if !self.path.exists() {
            tracing::debug!("No build log at {}, starting empty", self.path.display());
            return Ok(BuildLog::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BuildLog::new());
        }

        serde_json::from_str(&content).map_err(|e| ToolstampError::LogParseError {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Save the log using an atomic write.
    ///
    /// Writes to a sibling temp file and renames it over the target, so an
    /// interrupted write never leaves a truncated log behind.
    pub fn save(&self, log: &BuildLog) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let mut content = serde_json::to_string_pretty(log)
            .map_err(|e| anyhow::anyhow!("Failed to serialize build log: {}", e))?;
        content.push('\n');

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Saved {} versions to {}",
            log.len(),
            self.path.display()
        );
        Ok(())
    }
}
