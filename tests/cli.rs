//! Command-line behavior that needs no network or package manager

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("create-anta-app").unwrap();
    cmd.current_dir(workdir.path())
        .env("ANTA_CONFIG", workdir.path().join("no-settings.toml"));
    cmd
}

#[test]
fn test_help_lists_flags() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-install"))
        .stdout(predicate::str::contains("--skip-dev"))
        .stdout(predicate::str::contains("--repo"));
}

#[test]
fn test_invalid_project_name_fails_before_clone() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .args(["bad name!", "--defaults"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error creating Anta app"))
        .stderr(predicate::str::contains("letters, numbers, hyphens, and underscores"));

    assert!(std::fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_existing_directory_is_a_clone_failure() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("taken")).unwrap();

    cli(&temp)
        .args(["taken", "--defaults", "--skip-install", "--skip-dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target directory already exists"));
}

#[test]
fn test_malformed_settings_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("settings.toml");
    std::fs::write(&settings, "package_manager = \"cargo\"\n").unwrap();

    Command::cargo_bin("create-anta-app")
        .unwrap()
        .current_dir(temp.path())
        .env("ANTA_CONFIG", &settings)
        .args(["app", "--defaults"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid settings file"));
}

#[test]
fn test_dash_prefixed_project_name_is_cloned_as_a_directory() {
    if which::which("git").is_err() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("starter");
    let status = std::process::Command::new("git")
        .args(["init", "--quiet"])
        .arg(&source)
        .status()
        .unwrap();
    assert!(status.success());

    cli(&temp)
        .args(["--repo", &source.to_string_lossy()])
        .args(["--defaults", "--skip-install", "--skip-dev", "--", "--bare"])
        .assert()
        .success();

    let project = temp.path().join("--bare");
    assert!(project.join(".git").is_dir());
    let config = std::fs::read_to_string(project.join("config.js")).unwrap();
    assert!(config.contains("siteName: 'My Anta App'"));
    assert!(!temp.path().join("starter.git").exists());
}
