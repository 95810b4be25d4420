//! Configuration loading, parsing, and validation for toolstamp.
//!
//! This module handles all aspects of configuration:
//! - File schema in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation into typed config in [`validator`]
//! - Typed, validated config in [`tracker`]
//! - The starter config in [`skeleton`]
//!
//! # Example
//!
//! ```
//! use toolstamp::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".toolstamp");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "trackables:\n  - name: git\n    versionCommands: [[git, --version]]\n",
//! )
//! .unwrap();
//!
//! let config = load_config(&dir.join("config.yml")).unwrap();
//! assert_eq!(config.trackables[0].name(), "git");
//! ```

pub mod loader;
pub mod schema;
pub mod skeleton;
pub mod tracker;
pub mod validator;

pub use loader::{
    default_config_path, find_project_root, load_config, load_config_file, parse_config,
    CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{RawConfig, RawSettings, RawTrackable};
pub use skeleton::{write_skeleton, SKELETON};
pub use tracker::{ProbeSettings, Trackable, TrackerConfig};
pub use validator::{validate, validate_config, ValidationError};
