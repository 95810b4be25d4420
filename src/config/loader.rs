//! Configuration file discovery and loading.

use crate::config::schema::RawConfig;
use crate::config::tracker::TrackerConfig;
use crate::config::validator::validate;
use crate::error::{Result, ToolstampError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding toolstamp files inside a project.
pub const CONFIG_DIR: &str = ".toolstamp";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Default config location for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.toolstamp` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    let mut git_root = None;

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if git_root.is_none() && current.join(".git").exists() {
            git_root = Some(current.clone());
        }

        if !current.pop() {
            return git_root;
        }
    }
}

/// Parse config file content.
pub fn parse_config(content: &str, path: &Path) -> Result<RawConfig> {
    if content.trim().is_empty() {
        return Ok(RawConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ToolstampError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read and parse a config file without validating it.
pub fn load_config_file(path: &Path) -> Result<RawConfig> {
    if !path.exists() {
        return Err(ToolstampError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<TrackerConfig> {
    let raw = load_config_file(path)?;
    let config = validate(raw)?;
    tracing::debug!(
        "Loaded {} trackables from {}",
        config.trackables.len(),
        path.display()
    );
    Ok(config)
}
