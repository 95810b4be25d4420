//! Build history grouped by project version.
//!
//! - [`build_log`] - The ordered [`BuildLog`] and the [`merge`] operation
//! - [`store`] - Loading and saving the log as JSON

pub mod build_log;
pub mod store;

pub use build_log::{merge, BuildLog, MergeOutcome};
pub use store::LogStore;
