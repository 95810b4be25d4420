//! Configuration file schema.
//!
//! These types mirror the file as written. Every field is optional at this
//! level; the [`validator`](super::validator) decides what is required and
//! produces a [`TrackerConfig`](super::TrackerConfig).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of a toolstamp config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawConfig {
    /// Probe and storage settings.
    #[serde(default)]
    pub settings: RawSettings,

    /// Executables to track.
    #[serde(default)]
    pub trackables: Option<Vec<RawTrackable>>,
}

/// The `settings:` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSettings {
    /// Build log path, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<PathBuf>,

    /// Per-candidate timeout in seconds. `0` disables the timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// One entry of the `trackables:` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawTrackable {
    #[serde(default)]
    pub name: Option<String>,

    /// Candidate commands, each an argument vector.
    #[serde(
        default,
        rename = "versionCommands",
        alias = "version_commands",
        skip_serializing_if = "Option::is_none"
    )]
    pub version_commands: Option<Vec<Vec<String>>>,
}
