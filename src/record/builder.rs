//! Assembling build records from probe results.

use crate::config::{ProbeSettings, Trackable};
use crate::error::Result;
use crate::probe::{CommandRunner, ProbeRunner, SystemRunner};

use super::entry::{BuildRecord, Executables};
use super::platform::{PlatformProvider, WorkingDirectoryProvider};

/// Builds one [`BuildRecord`] by probing every trackable in order.
pub struct VersionEntryBuilder<'a, R = SystemRunner> {
    platform: &'a dyn PlatformProvider,
    probe: ProbeRunner<R>,
}

impl<'a> VersionEntryBuilder<'a, SystemRunner> {
    /// Create a builder that spawns real processes.
    ///
    /// Probes run in the directory supplied by `working_dir`, with the
    /// timeout from `settings`.
    pub fn system(
        platform: &'a dyn PlatformProvider,
        working_dir: &dyn WorkingDirectoryProvider,
        settings: &ProbeSettings,
    ) -> Result<Self> {
        let cwd = working_dir.working_dir()?;
        let probe = ProbeRunner::system(cwd).with_timeout(settings.timeout);
        Ok(Self::new(platform, probe))
    }
}

impl<'a, R: CommandRunner> VersionEntryBuilder<'a, R> {
    /// Create a builder around an existing probe runner.
    pub fn new(platform: &'a dyn PlatformProvider, probe: ProbeRunner<R>) -> Self {
        Self { platform, probe }
    }

    /// Probe all trackables and assemble a record.
    ///
    /// Every trackable gets exactly one entry, `None` if nothing was found.
    pub fn build(&self, trackables: &[Trackable]) -> BuildRecord {
        build_record(&self.platform.platform(), trackables, &self.probe)
    }
}

/// Probe `trackables` sequentially and pair the results with `platform`.
pub fn build_record<R: CommandRunner>(
    platform: &str,
    trackables: &[Trackable],
    probe: &ProbeRunner<R>,
) -> BuildRecord {
    let executables: Executables = trackables
        .iter()
        .map(|t| (t.name(), probe.probe(t)))
        .collect();

    tracing::debug!(
        "Built record for {}: {}/{} tools found",
        platform,
        executables.found_count(),
        executables.len()
    );

    BuildRecord::new(platform, executables)
}
