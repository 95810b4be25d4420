//! Probe, merge, return: one pass of the recording pipeline.
//!
//! [`stamp`] performs no file I/O. Callers load the log beforehand and
//! persist the returned log afterwards (see [`crate::log::LogStore`]).

use crate::config::Trackable;
use crate::log::{BuildLog, MergeOutcome};
use crate::probe::CommandRunner;
use crate::record::{BuildRecord, VersionEntryBuilder};

/// Result of a single [`stamp`] call.
#[derive(Debug, Clone)]
pub struct StampResult {
    /// The log with the record merged in.
    pub log: BuildLog,

    /// The record that was built for this run.
    pub record: BuildRecord,

    /// Whether the record was new for this version.
    pub outcome: MergeOutcome,
}

impl StampResult {
    /// True if the log gained a record.
    pub fn is_new(&self) -> bool {
        self.outcome == MergeOutcome::Added
    }
}

/// Probe `trackables` and merge the resulting record into `log` under
/// `version`.
pub fn stamp<R: CommandRunner>(
    trackables: &[Trackable],
    version: &str,
    mut log: BuildLog,
    builder: &VersionEntryBuilder<'_, R>,
) -> StampResult {
    let record = builder.build(trackables);
    let outcome = log.merge_record(version, record.clone());

    match outcome {
        MergeOutcome::Added => tracing::debug!("Added build record under {}", version),
        MergeOutcome::Duplicate => {
            tracing::debug!("Build record already present under {}", version)
        }
    }

    StampResult {
        log,
        record,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::probe::runner::testing::ScriptedRunner;
    use crate::probe::ProbeRunner;
    use crate::record::FixedPlatform;

    fn trackables() -> Vec<Trackable> {
        vec![
            Trackable::new("git", vec![vec!["git".into(), "--version".into()]]).unwrap(),
            Trackable::new(
                "npm",
                vec![vec!["npm".into(), "-v".into()], vec!["npm.cmd".into(), "-v".into()]],
            )
            .unwrap(),
        ]
    }

    fn runner() -> ScriptedRunner {
        ScriptedRunner::new()
            .succeed("git --version", "git version 2.34.1\n")
            .succeed("npm.cmd -v", "10.2.4\r\n")
    }

    #[test]
    fn stamps_new_version() {
        let runner = runner();
        let platform = FixedPlatform("win32".to_string());
        let builder =
            VersionEntryBuilder::new(&platform, ProbeRunner::new(&runner, PathBuf::from(".")));

        let result = stamp(&trackables(), "1.0.0", BuildLog::new(), &builder);

        assert!(result.is_new());
        assert_eq!(result.record.platform, "win32");
        assert_eq!(result.record.executables.get("npm"), Some(Some("10.2.4")));
        assert_eq!(result.log.get("1.0.0").unwrap(), &[result.record.clone()]);
    }

    #[test]
    fn second_identical_stamp_is_duplicate() {
        let runner = runner();
        let platform = FixedPlatform("linux".to_string());
        let builder =
            VersionEntryBuilder::new(&platform, ProbeRunner::new(&runner, PathBuf::from(".")));

        let first = stamp(&trackables(), "1.0.0", BuildLog::new(), &builder);
        let with_other = stamp(&trackables(), "2.0.0", first.log, &builder);
        let again = stamp(&trackables(), "1.0.0", with_other.log, &builder);

        assert!(!again.is_new());
        assert_eq!(again.log.versions().collect::<Vec<_>>(), vec!["1.0.0", "2.0.0"]);
        assert_eq!(again.log.get("1.0.0").unwrap().len(), 1);
    }
}
