//! Project version resolution.
//!
//! The version a record is filed under comes from the command line when
//! given, otherwise from the project's own manifest.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ToolstampError};

static CARGO_PACKAGE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?msR)^\[package\][ \t]*$(.*?)(?:^\[|\z)").unwrap());

static CARGO_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^[ \t]*version[ \t]*=[ \t]*"([^"]+)""#).unwrap());

/// Resolve the project version for `root`.
///
/// Order: `explicit`, then `package.json`'s `version`, then the
/// `[package]` version in `Cargo.toml`. Blank values are skipped.
pub fn resolve_version(root: &Path, explicit: Option<&str>) -> Result<String> {
    if let Some(version) = explicit.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(version.to_string());
    }

    if let Some(version) = package_json_version(root)? {
        tracing::debug!("Using version {} from package.json", version);
        return Ok(version);
    }

    if let Some(version) = cargo_toml_version(root)? {
        tracing::debug!("Using version {} from Cargo.toml", version);
        return Ok(version);
    }

    Err(ToolstampError::ProjectVersionUnknown {
        root: root.to_path_buf(),
    })
}

fn package_json_version(root: &Path) -> Result<Option<String>> {
    let path = root.join("package.json");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let manifest: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring unreadable {}: {}", path.display(), e);
            return Ok(None);
        }
    };

    Ok(manifest
        .get("version")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from))
}

fn cargo_toml_version(root: &Path) -> Result<Option<String>> {
    let path = root.join("Cargo.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    Ok(parse_cargo_version(&content))
}

/// Extract the `[package]` version from Cargo.toml content.
fn parse_cargo_version(content: &str) -> Option<String> {
    let section = CARGO_PACKAGE_SECTION.captures(content)?.get(1)?.as_str();
    let version = CARGO_VERSION.captures(section)?.get(1)?.as_str().trim();
    (!version.is_empty()).then(|| version.to_string())
}
