//! Providers for process-global context.
//!
//! The platform identifier and working directory are passed into the
//! record builder instead of being read from the environment, so records
//! can be built deterministically in tests.

use std::io;
use std::path::PathBuf;

/// Supplies the platform identifier stored in build records.
pub trait PlatformProvider {
    fn platform(&self) -> String;
}

/// Supplies the directory probes run in.
pub trait WorkingDirectoryProvider {
    fn working_dir(&self) -> io::Result<PathBuf>;
}

/// Reads the platform of the running binary (`std::env::consts::OS`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlatform;

impl PlatformProvider for SystemPlatform {
    fn platform(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

/// A fixed platform identifier.
#[derive(Debug, Clone)]
pub struct FixedPlatform(pub String);

impl PlatformProvider for FixedPlatform {
    fn platform(&self) -> String {
        self.0.clone()
    }
}

/// A fixed working directory, typically the project root.
#[derive(Debug, Clone)]
pub struct FixedDirectory(pub PathBuf);

impl WorkingDirectoryProvider for FixedDirectory {
    fn working_dir(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_platform_matches_target_os() {
        assert_eq!(SystemPlatform.platform(), std::env::consts::OS);
    }

    #[test]
    fn fixed_platform_returns_value() {
        assert_eq!(FixedPlatform("linux".to_string()).platform(), "linux");
    }

    #[test]
    fn fixed_directory_returns_path() {
        let dir = FixedDirectory(PathBuf::from("/project"));
        assert_eq!(dir.working_dir().unwrap(), PathBuf::from("/project"));
    }
}
