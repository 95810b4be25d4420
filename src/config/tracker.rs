//! Validated tracker configuration.
//!
//! These types are only constructed through [`Trackable::new`] and the
//! validator, so code that receives a [`TrackerConfig`] never has to
//! re-check its shape.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, ToolstampError};

/// Default location of the build log, relative to the project root.
pub const DEFAULT_LOG_PATH: &str = ".toolstamp/builds.json";

/// Default per-candidate probe timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One executable and its fallback version commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trackable {
    name: String,
    commands: Vec<Vec<String>>,
}

impl Trackable {
    /// Create a trackable.
    ///
    /// Fails with [`ToolstampError::ConfigMalformed`] if the name is blank,
    /// there are no candidates, or any candidate has no program.
    pub fn new(name: impl Into<String>, commands: Vec<Vec<String>>) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ToolstampError::ConfigMalformed {
                message: "trackable name must not be empty".to_string(),
            });
        }

        if commands.is_empty() {
            return Err(ToolstampError::ConfigMalformed {
                message: format!("Trackable '{}' has no version commands", name),
            });
        }

        if let Some(index) = commands
            .iter()
            .position(|argv| argv.first().is_none_or(|program| program.trim().is_empty()))
        {
            return Err(ToolstampError::ConfigMalformed {
                message: format!(
                    "Trackable '{}' version command #{} has no program",
                    name,
                    index + 1
                ),
            });
        }

        Ok(Self { name, commands })
    }

    /// Name of the executable, used as the key in build records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidate argument vectors, in the order they are tried.
    pub fn commands(&self) -> &[Vec<String>] {
        &self.commands
    }
}

/// Settings that control probing and log storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Build log location, relative to the project root unless absolute.
    pub log_path: PathBuf,

    /// Per-candidate timeout (None = wait forever).
    pub timeout: Option<Duration>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

/// A validated list of trackables plus settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    pub trackables: Vec<Trackable>,
    pub settings: ProbeSettings,
}

impl TrackerConfig {
    /// Create a config with default settings.
    pub fn new(trackables: Vec<Trackable>) -> Self {
        Self {
            trackables,
            settings: ProbeSettings::default(),
        }
    }

    /// Find a trackable by name.
    pub fn get(&self, name: &str) -> Option<&Trackable> {
        self.trackables.iter().find(|t| t.name() == name)
    }

    /// Resolve the log path against a project root.
    pub fn log_path(&self, project_root: &std::path::Path) -> PathBuf {
        project_root.join(&self.settings.log_path)
    }
}
