//! Version probing of external executables.
//!
//! - [`ansi`] - Escape-sequence stripping for captured output
//! - [`command`] - Process execution with capture and timeout
//! - [`runner`] - First-success-wins fallback over a trackable's candidates

pub mod ansi;
pub mod command;
pub mod runner;

pub use ansi::{strip_ansi, strip_ansi_bytes};
pub use command::{execute, CommandOptions, CommandResult, CommandRunner, SystemRunner};
pub use runner::{combine_output, CandidateOutcome, ProbeMiss, ProbeRunner};
