//! Configuration validation.
//!
//! Turns a [`RawConfig`] into a [`TrackerConfig`] in a single pass:
//! - A `trackables` list must be present
//! - Every trackable needs a non-empty, unique name
//! - Every trackable needs at least one version command
//! - Every version command needs a program

use std::collections::HashSet;
use std::time::Duration;

use crate::config::schema::{RawConfig, RawSettings, RawTrackable};
use crate::config::tracker::{ProbeSettings, Trackable, TrackerConfig};
use crate::error::{Result, ToolstampError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// 1-based position of the offending trackable, if any
    pub index: Option<usize>,
}

impl ValidationError {
    fn new(rule: &str, message: String, index: Option<usize>) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            index,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one, so a
/// user can fix the whole file in one go.
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let Some(trackables) = &config.trackables else {
        return vec![ValidationError::new(
            "missing-trackables",
            "Config must contain a 'trackables' list".to_string(),
            None,
        )];
    };

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, raw) in trackables.iter().enumerate() {
        let index = i + 1;
        errors.extend(validate_trackable(raw, index));

        if let Some(name) = raw.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            if !seen.insert(name) {
                errors.push(ValidationError::new(
                    "duplicate-name",
                    format!("Trackable #{} reuses the name '{}'", index, name),
                    Some(index),
                ));
            }
        }
    }

    errors
}

fn validate_trackable(raw: &RawTrackable, index: usize) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let label = match raw.name.as_deref() {
        Some(name) if !name.trim().is_empty() => format!("Trackable '{}'", name),
        _ => format!("Trackable #{}", index),
    };

    if raw.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        errors.push(ValidationError::new(
            "missing-name",
            format!("Trackable #{} is missing 'name'", index),
            Some(index),
        ));
    }

    match &raw.version_commands {
        None => errors.push(ValidationError::new(
            "missing-commands",
            format!("{} is missing 'versionCommands'", label),
            Some(index),
        )),
        Some(commands) if commands.is_empty() => errors.push(ValidationError::new(
            "missing-commands",
            format!("{} has an empty 'versionCommands' list", label),
            Some(index),
        )),
        Some(commands) => {
            for (j, argv) in commands.iter().enumerate() {
                if argv.first().is_none_or(|program| program.trim().is_empty()) {
                    errors.push(ValidationError::new(
                        "empty-command",
                        format!("{} version command #{} has no program", label, j + 1),
                        Some(index),
                    ));
                }
            }
        }
    }

    errors
}

/// Validate a configuration, producing the typed config or a
/// [`ToolstampError::ConfigMalformed`] listing every problem.
pub fn validate(config: RawConfig) -> Result<TrackerConfig> {
    let errors = validate_config(&config);
    if !errors.is_empty() {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        return Err(ToolstampError::ConfigMalformed {
            message: messages.join("; "),
        });
    }

    let trackables = config
        .trackables
        .unwrap_or_default()
        .into_iter()
        .map(|raw| {
            Trackable::new(
                raw.name.unwrap_or_default().trim(),
                raw.version_commands.unwrap_or_default(),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    if trackables.is_empty() {
        tracing::warn!("Config has no trackables; records will be empty");
    }

    Ok(TrackerConfig {
        trackables,
        settings: settings_from(config.settings),
    })
}

fn settings_from(raw: RawSettings) -> ProbeSettings {
    let defaults = ProbeSettings::default();
    ProbeSettings {
        log_path: raw.log.unwrap_or(defaults.log_path),
        timeout: match raw.timeout_secs {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.timeout,
        },
    }
}
