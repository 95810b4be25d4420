//! toolstamp - Record which tool versions built each release.
//!
//! toolstamp probes a configured list of executables (runtimes, package
//! managers, VCS clients) and files the versions it finds under the
//! project's version in a JSON build log, so a working environment can be
//! reproduced later.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`log`] - The ordered build log, merging, and persistence
//! - [`probe`] - Running version commands with fallback and ANSI stripping
//! - [`project`] - Project version detection
//! - [`record`] - Build records and the builder that probes them
//! - [`stamp`] - One probe-and-merge pass
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use toolstamp::log::{merge, BuildLog};
//! use toolstamp::record::{BuildRecord, Executables};
//!
//! let executables: Executables = [("git", Some("git version 2.34.1".to_string()))]
//!     .into_iter()
//!     .collect();
//! let record = BuildRecord::new("linux", executables);
//!
//! let log = merge(BuildLog::new(), "1.0.0", record.clone());
//! let log = merge(log, "1.0.0", record);
//! assert_eq!(log.get("1.0.0").unwrap().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod probe;
pub mod project;
pub mod record;
pub mod stamp;
pub mod ui;

pub use error::{Result, ToolstampError};
