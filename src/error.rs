//! Error types for toolstamp operations.
//!
//! This module defines [`ToolstampError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe misses are not errors; they are absorbed by the probe runner
//! - Use `ToolstampError` for failures the user has to act on
//! - Use `anyhow::Error` (via `ToolstampError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolstamp operations.
#[derive(Debug, Error)]
pub enum ToolstampError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but its trackables are malformed.
    #[error("Malformed configuration: {message}")]
    ConfigMalformed { message: String },

    /// Refused to overwrite an existing configuration file.
    #[error("Configuration already exists: {path}")]
    ConfigExists { path: PathBuf },

    /// Failed to parse a stored build log.
    #[error("Failed to parse build log at {path}: {message}")]
    LogParseError { path: PathBuf, message: String },

    /// No project version was given and none could be detected.
    #[error("Could not determine project version in {root} (use --project-version)")]
    ProjectVersionUnknown { root: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toolstamp operations.
pub type Result<T> = std::result::Result<T, ToolstampError>;
