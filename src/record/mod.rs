//! Build records: one snapshot of the tools present for a build.
//!
//! - [`entry`] - The [`BuildRecord`] type and its canonical form
//! - [`builder`] - Probing every trackable into a record
//! - [`platform`] - Injected platform and working-directory providers

pub mod builder;
pub mod entry;
pub mod platform;

pub use builder::{build_record, VersionEntryBuilder};
pub use entry::{BuildRecord, Executables};
pub use platform::{
    FixedDirectory, FixedPlatform, PlatformProvider, SystemPlatform, WorkingDirectoryProvider,
};
