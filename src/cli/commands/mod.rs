//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations (`toolstamp record`,
//! `toolstamp history`, ...). Running without a subcommand records.

pub mod dispatcher;
pub mod display;
pub mod history;
pub mod init;
pub mod probe;
pub mod record;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
