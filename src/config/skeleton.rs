//! Starter configuration written by `toolstamp init`.

use std::fs;
use std::path::Path;

use crate::error::{Result, ToolstampError};

/// Config written for new projects.
pub const SKELETON: &str = r#"# toolstamp configuration
#
# Each trackable lists version commands to try in order. The first one
# that exits 0 with output wins.

settings:
  log: .toolstamp/builds.json
  timeout_secs: 10

trackables:
  - name: node
    versionCommands:
      - [node, --version]
  - name: npm
    versionCommands:
      - [npm, --version]
      - [npm.cmd, --version]
  - name: git
    versionCommands:
      - [git, --version]
"#;

/// Write the starter config to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_skeleton(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ToolstampError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, SKELETON)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, parse_config, validate};
    use tempfile::TempDir;

    #[test]
    fn skeleton_is_valid() {
        let raw = parse_config(SKELETON, Path::new("skeleton.yml")).unwrap();
        let config = validate(raw).unwrap();

        let names: Vec<_> = config.trackables.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["node", "npm", "git"]);
        assert_eq!(config.get("npm").unwrap().commands().len(), 2);
    }

    #[test]
    fn write_skeleton_creates_loadable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".toolstamp").join("config.yml");

        write_skeleton(&path, false).unwrap();

        assert!(load_config(&path).is_ok());
    }

    #[test]
    fn write_skeleton_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "custom").unwrap();

        let err = write_skeleton(&path, false).unwrap_err();
        assert!(matches!(err, ToolstampError::ConfigExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom");
    }

    #[test]
    fn write_skeleton_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "custom").unwrap();

        write_skeleton(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), SKELETON);
    }
}
