//! Integration tests for the toolstamp binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".toolstamp");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

fn toolstamp(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("toolstamp"));
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("TOOLSTAMP_PROJECT_VERSION")
        .env_remove("RUST_LOG");
    cmd
}

const MISSING_TOOL_CONFIG: &str = r#"
trackables:
  - name: ghost
    versionCommands:
      - [definitely-not-a-real-tool-xyz, --version]
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolstamp"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Record which tool versions"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolstamp"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolstamp"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_init_creates_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    toolstamp(&temp)
        .args(["init", "-p"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let config = fs::read_to_string(temp.path().join(".toolstamp/config.yml"))?;
    assert!(config.contains("versionCommands"));
    Ok(())
}

#[test]
fn cli_init_twice_fails_without_force() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    toolstamp(&temp)
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    toolstamp(&temp).args(["init", "--force"]).assert().success();
    Ok(())
}

#[test]
fn cli_record_without_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    toolstamp(&temp)
        .args(["record", "--project-version", "1.0.0", "-p"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("toolstamp init"));
    Ok(())
}

#[test]
fn cli_malformed_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
trackables:
  - name: git
    versionCommands: []
  - versionCommands: [[node, -v]]
"#,
    );
    toolstamp(&temp)
        .args(["record", "--project-version", "1.0.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed configuration"));
    Ok(())
}

#[test]
fn cli_unparseable_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("trackables: [unclosed\n");
    toolstamp(&temp)
        .arg("probe")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_record_without_version_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    toolstamp(&temp)
        .arg("record")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--project-version"));
    Ok(())
}

#[test]
fn cli_record_reads_version_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    toolstamp(&temp)
        .arg("record")
        .env("TOOLSTAMP_PROJECT_VERSION", "4.5.6")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded build environment for 4.5.6"));
    Ok(())
}

#[test]
fn cli_no_args_records_from_package_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    fs::write(temp.path().join("package.json"), r#"{"version": "0.3.0"}"#)?;

    toolstamp(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded build environment for 0.3.0"));

    let log = fs::read_to_string(temp.path().join(".toolstamp/builds.json"))?;
    let parsed: serde_json::Value = serde_json::from_str(&log)?;
    assert!(parsed["0.3.0"][0]["executables"]["ghost"].is_null());
    Ok(())
}

#[test]
fn cli_config_flag_overrides_location() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("tools.yml");
    fs::write(&config, MISSING_TOOL_CONFIG)?;

    toolstamp(&temp)
        .args(["probe", "-p"])
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("ghost: not found"));
    Ok(())
}

#[test]
fn cli_probe_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    let output = toolstamp(&temp).args(["probe", "--json"]).output()?;
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(record["platform"], std::env::consts::OS);
    assert!(record["executables"]["ghost"].is_null());
    assert!(!temp.path().join(".toolstamp/builds.json").exists());
    Ok(())
}

#[test]
fn cli_history_empty() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    toolstamp(&temp)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No builds recorded yet."));
    Ok(())
}

#[test]
fn cli_history_json_after_records() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    for version in ["1.0.0", "2.0.0", "1.0.0"] {
        toolstamp(&temp)
            .args(["record", "--project-version", version])
            .assert()
            .success();
    }

    let output = toolstamp(&temp).args(["history", "--json"]).output()?;
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout)?;

    // Most recently recorded version is listed first.
    let first = text.find("\"1.0.0\"").unwrap();
    let second = text.find("\"2.0.0\"").unwrap();
    assert!(first < second);
    Ok(())
}

#[cfg(unix)]
mod unix {
    use super::*;

    const FALLBACK_CONFIG: &str = r#"
trackables:
  - name: greeter
    versionCommands:
      - [definitely-not-a-real-tool-xyz, --version]
      - [sh, -c, "exit 3"]
      - [sh, -c, "printf '\e[32mgreeter 1.2.3\e[0m\n'"]
"#;

    #[test]
    fn cli_record_uses_fallback_and_strips_ansi() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project(FALLBACK_CONFIG);
        toolstamp(&temp)
            .args(["record", "--project-version", "1.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("greeter: greeter 1.2.3"));

        let log = fs::read_to_string(temp.path().join(".toolstamp/builds.json"))?;
        let parsed: serde_json::Value = serde_json::from_str(&log)?;
        assert_eq!(
            parsed["1.0.0"][0]["executables"]["greeter"],
            "greeter 1.2.3"
        );
        Ok(())
    }

    #[test]
    fn cli_record_strips_raw_c1_bytes() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project(
            r#"
trackables:
  - name: greeter
    versionCommands:
      - [sh, -c, "printf '\\23332mgreeter 1.2.3\\2330m\\n'"]
"#,
        );
        toolstamp(&temp)
            .args(["record", "--project-version", "1.0.0"])
            .assert()
            .success();

        let log = fs::read_to_string(temp.path().join(".toolstamp/builds.json"))?;
        let parsed: serde_json::Value = serde_json::from_str(&log)?;
        assert_eq!(
            parsed["1.0.0"][0]["executables"]["greeter"],
            "greeter 1.2.3"
        );
        Ok(())
    }

    #[test]
    fn cli_record_twice_is_already_recorded() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project(FALLBACK_CONFIG);
        toolstamp(&temp)
            .args(["record", "--project-version", "1.0.0"])
            .assert()
            .success();
        toolstamp(&temp)
            .args(["record", "--project-version", "1.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already recorded"));

        let log = fs::read_to_string(temp.path().join(".toolstamp/builds.json"))?;
        let parsed: serde_json::Value = serde_json::from_str(&log)?;
        assert_eq!(parsed["1.0.0"].as_array().unwrap().len(), 1);
        Ok(())
    }

    #[test]
    fn cli_history_shows_recorded_tools() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project(FALLBACK_CONFIG);
        toolstamp(&temp)
            .args(["record", "--project-version", "1.0.0"])
            .assert()
            .success();

        toolstamp(&temp)
            .arg("history")
            .assert()
            .success()
            .stdout(predicate::str::contains("1.0.0"))
            .stdout(predicate::str::contains("greeter 1.2.3"));
        Ok(())
    }

    #[test]
    fn cli_quiet_hides_fields() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_project(FALLBACK_CONFIG);
        toolstamp(&temp)
            .args(["record", "--quiet", "--project-version", "1.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("greeter:").not())
            .stdout(predicate::str::contains("Recorded build environment"));
        Ok(())
    }
}
