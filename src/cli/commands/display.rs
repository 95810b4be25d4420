//! Shared display helpers for command output.

use crate::record::BuildRecord;
use crate::ui::{OutputMode, UserInterface};

/// Shown in place of a version for tools no candidate could find.
pub const NOT_FOUND: &str = "not found";

/// Version text for display.
///
/// Multi-line probe output is cut to its first line unless verbose.
pub fn version_text(version: Option<&str>, mode: OutputMode) -> String {
    match version {
        Some(v) if mode == OutputMode::Verbose => v.to_string(),
        Some(v) => v.lines().next().unwrap_or_default().to_string(),
        None => NOT_FOUND.to_string(),
    }
}

/// Show a record's platform and one field per tool.
pub fn show_record(ui: &mut dyn UserInterface, record: &BuildRecord) {
    let mode = ui.output_mode();
    ui.show_field("platform", &record.platform);
    for (name, version) in record.executables.iter() {
        ui.show_field(name, &version_text(version, mode));
    }
}

/// Warn about tools that no candidate command could find.
pub fn warn_missing(ui: &mut dyn UserInterface, record: &BuildRecord) {
    let missing: Vec<&str> = record
        .executables
        .iter()
        .filter(|(_, version)| version.is_none())
        .map(|(name, _)| name)
        .collect();
    if !missing.is_empty() {
        ui.warning(&format!("Not found: {}", missing.join(", ")));
    }
}
