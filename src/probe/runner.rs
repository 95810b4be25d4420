//! Fallback probing of a single trackable.
//!
//! Each candidate command is tried in order until one exits 0 with
//! non-empty output. Everything else is a miss, and a trackable whose
//! candidates all miss simply has no version.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Trackable;

use super::ansi::strip_ansi;
use super::command::{CommandOptions, CommandRunner, SystemRunner};

/// Why a single candidate did not produce a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeMiss {
    /// The process could not be started (usually: executable not installed).
    SpawnFailed(String),
    /// The process exited with a non-zero status or was killed by a signal.
    NonZeroExit(Option<i32>),
    /// The process was killed at its deadline.
    TimedOut,
    /// The process succeeded but printed nothing after stripping.
    EmptyOutput,
}

impl fmt::Display for ProbeMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpawnFailed(reason) => write!(f, "failed to spawn: {}", reason),
            Self::NonZeroExit(Some(code)) => write!(f, "exited with code {}", code),
            Self::NonZeroExit(None) => write!(f, "terminated by signal"),
            Self::TimedOut => write!(f, "timed out"),
            Self::EmptyOutput => write!(f, "produced no output"),
        }
    }
}

/// Outcome of running one candidate command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// The candidate produced this version string.
    Hit(String),
    /// The candidate missed; the next one should be tried.
    Miss(ProbeMiss),
}

/// Runs a trackable's candidate commands until one succeeds.
#[derive(Debug, Clone)]
pub struct ProbeRunner<R = SystemRunner> {
    runner: R,
    cwd: PathBuf,
    timeout: Option<Duration>,
}

impl ProbeRunner<SystemRunner> {
    /// Create a runner that spawns real processes in `cwd`.
    pub fn system(cwd: PathBuf) -> Self {
        Self::new(SystemRunner, cwd)
    }
}

impl<R: CommandRunner> ProbeRunner<R> {
    /// Create a runner around any command runner.
    pub fn new(runner: R, cwd: PathBuf) -> Self {
        Self {
            runner,
            cwd,
            timeout: None,
        }
    }

    /// Set the per-candidate timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Working directory candidates run in.
    pub fn cwd(&self) -> &std::path::Path {
        &self.cwd
    }

    /// Probe a trackable, returning the first candidate's version or `None`.
    pub fn probe(&self, trackable: &Trackable) -> Option<String> {
        for (index, argv) in trackable.commands().iter().enumerate() {
            match self.attempt(argv) {
                CandidateOutcome::Hit(version) => {
                    tracing::debug!(
                        "{}: candidate #{} {:?} -> {:?}",
                        trackable.name(),
                        index + 1,
                        argv,
                        version
                    );
                    return Some(version);
                }
                CandidateOutcome::Miss(reason) => {
                    tracing::debug!(
                        "{}: candidate #{} {:?} missed ({})",
                        trackable.name(),
                        index + 1,
                        argv,
                        reason
                    );
                }
            }
        }

        tracing::debug!("{}: no candidate produced a version", trackable.name());
        None
    }

    /// Run one candidate and classify the result.
    pub fn attempt(&self, argv: &[String]) -> CandidateOutcome {
        let options = CommandOptions {
            cwd: Some(self.cwd.clone()),
            timeout: self.timeout,
            ..Default::default()
        };

        let result = match self.runner.run(argv, &options) {
            Ok(result) => result,
            Err(e) => return CandidateOutcome::Miss(ProbeMiss::SpawnFailed(e.to_string())),
        };

        if result.timed_out {
            return CandidateOutcome::Miss(ProbeMiss::TimedOut);
        }

        if !result.success {
            return CandidateOutcome::Miss(ProbeMiss::NonZeroExit(result.exit_code));
        }

        let output = combine_output(&result.stdout, &result.stderr);
        if output.is_empty() {
            CandidateOutcome::Miss(ProbeMiss::EmptyOutput)
        } else {
            CandidateOutcome::Hit(output)
        }
    }
}

/// Join stdout and stderr (stdout first), strip escapes, and trim.
pub fn combine_output(stdout: &str, stderr: &str) -> String {
    let mut combined = String::with_capacity(stdout.len() + stderr.len());
    combined.push_str(stdout);
    combined.push_str(stderr);
    strip_ansi(&combined).trim().to_string()
}
