//! End-to-end CLI integration tests.
//!
//! These tests verify the complete CLI workflow by:
//! 1. Creating a temporary build directory with a changelog
//! 2. Running logenv commands
//! 3. Verifying the rendered environment and exit status

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CHANGELOG: &str = "\
commit 0123456789abcdef
tree fedcba9876543210
author Jane Doe <jane@x.com> 1700000000 +0000
committer Jane Doe <jane@x.com> 1700000000 +0000

    Initial commit

:000000 100644 0000000 1111111 A\tREADME.md

commit 1123456789abcdef
author Bob Roe <bob@x.com> 1700000100 +0000
committer Bob Roe <bob@x.com> 1700000100 +0000

    Fix bug

:100644 100644 1111111 2222222 M\tsrc/lib.rs
";

/// Returns a command for the logenv binary running inside `dir`.
fn logenv(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("logenv").expect("logenv binary should be built");
    cmd.current_dir(dir).env_remove("LOGENV_BUILD_DIR").env_remove("RUST_LOG");
    cmd
}

/// Creates a build directory holding `changelog.xml`.
fn setup_build_dir(changelog: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    fs::write(temp_dir.path().join("changelog.xml"), changelog)
        .expect("failed to write changelog");
    temp_dir
}

#[test]
fn test_run_prints_shell_export() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();

    logenv(dir)
        .args(["run", "--build-dir"])
        .arg(dir)
        .assert()
        .success()
        .stdout("export CHANGELOG='Initial commit - Jane Doe\n----\nFix bug - Bob Roe'\n");
}

#[test]
fn test_run_json_format() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();

    logenv(dir)
        .args(["run", "--format", "json", "--build-dir"])
        .arg(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""CHANGELOG": "Initial commit - Jane Doe\n----\nFix bug - Bob Roe""#,
        ));
}

#[test]
fn test_run_writes_output_file() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();
    let env_file = dir.join("build.env");

    logenv(dir)
        .args(["run", "--format", "dotenv", "--build-dir"])
        .arg(dir)
        .arg("--output")
        .arg(&env_file)
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&env_file).expect("failed to read env file");
    assert_eq!(
        content,
        "CHANGELOG=\"Initial commit - Jane Doe\\n----\\nFix bug - Bob Roe\"\n"
    );
}

#[test]
fn test_run_uses_build_dir_from_env() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();

    logenv(dir)
        .arg("run")
        .env("LOGENV_BUILD_DIR", dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix bug - Bob Roe"));
}

#[test]
fn test_run_missing_changelog_fails() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();

    logenv(dir)
        .args(["run", "--build-dir"])
        .arg(dir)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("changelog unavailable"));
}

#[test]
fn test_run_missing_changelog_with_empty_policy() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();
    fs::write(
        dir.join("logenv.toml"),
        r#"
[changelog]
on_missing = "empty"
"#,
    )
    .expect("failed to write config");

    logenv(dir)
        .args(["run", "--build-dir"])
        .arg(dir)
        .assert()
        .success()
        .stdout("export CHANGELOG=''\n")
        .stderr(predicate::str::contains("changelog unavailable"));
}

#[test]
fn test_run_with_custom_config() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();
    let config_path = dir.join("custom.toml");
    fs::write(
        &config_path,
        r#"
[changelog]
variable = "RELEASE_NOTES"
separator = " | "

[steps]
enabled = ["changelog"]
"#,
    )
    .expect("failed to write config");

    logenv(dir)
        .args(["run", "--build-dir"])
        .arg(dir)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout("export RELEASE_NOTES='Initial commit - Jane Doe | Fix bug - Bob Roe'\n");
}

#[test]
fn test_run_greets_in_french() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();
    fs::write(
        dir.join("logenv.toml"),
        r#"
[greeting]
name = "Jenkins"
use_french = true
"#,
    )
    .expect("failed to write config");

    logenv(dir)
        .args(["run", "--build-dir"])
        .arg(dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Bonjour, Jenkins!"));
}

#[test]
fn test_run_unknown_step_fails() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();
    fs::write(
        dir.join("logenv.toml"),
        r#"
[steps]
enabled = ["changelog", "deploy"]
"#,
    )
    .expect("failed to write config");

    logenv(dir)
        .args(["run", "--build-dir"])
        .arg(dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown step: deploy"));
}

#[test]
fn test_parse_prints_joined_changelog() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();

    logenv(dir)
        .args(["parse", "changelog.xml"])
        .assert()
        .success()
        .stdout("Initial commit - Jane Doe\n----\nFix bug - Bob Roe\n");
}

#[test]
fn test_parse_custom_separator() {
    let temp_dir = setup_build_dir(CHANGELOG);
    let dir = temp_dir.path();

    logenv(dir)
        .args(["parse", "changelog.xml", "--separator", "; "])
        .assert()
        .success()
        .stdout("Initial commit - Jane Doe; Fix bug - Bob Roe\n");
}

#[test]
fn test_parse_missing_file() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    logenv(temp_dir.path())
        .args(["parse", "changelog.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("changelog unavailable"));
}

#[test]
fn test_check_name_outcomes() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();

    logenv(dir)
        .args(["check-name", "Jenkins"])
        .assert()
        .success()
        .stdout("ok\n");

    logenv(dir)
        .args(["check-name", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("too short"));

    logenv(dir)
        .arg("check-name")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please set a name"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();

    logenv(dir)
        .args(["init", "--french"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created logenv.toml"));

    let content = fs::read_to_string(dir.join("logenv.toml")).expect("failed to read config");
    assert!(content.contains("[changelog]"), "config should have changelog section");
    assert!(content.contains("use_french = true"), "config should enable French");
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();
    fs::write(dir.join("logenv.toml"), "# old config\n").expect("failed to write config");

    logenv(dir).arg("init").assert().failure();

    logenv(dir).args(["init", "--force"]).assert().success();

    let content = fs::read_to_string(dir.join("logenv.toml")).expect("failed to read config");
    assert!(!content.contains("# old config"), "config should be overwritten");
}

#[test]
fn test_steps_lists_registered_steps() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    logenv(temp_dir.path())
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("Changelog to ENV"))
        .stdout(predicate::str::contains("greeting"));
}

#[test]
fn test_steps_marks_enabled_steps() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();
    fs::write(
        dir.join("logenv.toml"),
        r#"
[steps]
enabled = ["changelog"]
"#,
    )
    .expect("failed to write config");

    logenv(dir)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("* changelog"))
        .stdout(predicate::str::contains("  greeting"));
}
