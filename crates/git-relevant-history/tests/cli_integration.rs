//! End-to-end tests for the installed `git-relevant-history` command.

use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const SUMMARY: &str =
    "git-relevant-history 1.0.1: Extract subproject with just the relevant history";

/// Runs the command inside an isolated working directory.
fn git_relevant_history(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("git-relevant-history");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_invokes_main_callable() {
    let dir = TempDir::new().unwrap();
    git_relevant_history(&dir)
        .assert()
        .success()
        .stdout(format!("{SUMMARY}\n"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    git_relevant_history(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-relevant-history 1.0.1"));
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    git_relevant_history(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Usage: git-relevant-history")
                .and(predicate::str::contains("--metadata"))
                .and(predicate::str::contains("--config")),
        );
}

#[test]
fn test_unknown_flag_fails() {
    let dir = TempDir::new().unwrap();
    git_relevant_history(&dir)
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_metadata_output() {
    let dir = TempDir::new().unwrap();
    let output = git_relevant_history(&dir)
        .arg("--metadata")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let metadata: toml::Table = toml::from_str(&String::from_utf8(output).unwrap()).unwrap();
    assert_eq!(metadata["name"].as_str(), Some("git-relevant-history"));
    assert_eq!(metadata["version"].as_str(), Some("1.0.1"));
    assert_eq!(metadata["license"].as_str(), Some("Apache-2.0"));
    assert_eq!(metadata["author_email"].as_str(), Some("github@rainlabs.pl"));

    let scripts = metadata["console_scripts"].as_array().unwrap();
    assert_eq!(scripts.len(), 1);
    assert_eq!(
        scripts[0].as_str(),
        Some("git-relevant-history = gitrelevanthistory.main:main")
    );

    let requires = metadata["requires"].as_array().unwrap();
    let clap_count = requires
        .iter()
        .filter(|r| r.as_str() == Some("clap"))
        .count();
    assert_eq!(clap_count, 1);
}

#[test]
fn test_config_file_discovered_from_parent() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".git-relevant-history.toml"),
        "[log]\nlevel = \"debug\"\n",
    )
    .unwrap();
    let nested = dir.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    git_relevant_history(&dir)
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(format!("{SUMMARY}\n"))
        .stderr(predicate::str::contains("configuration loaded"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    git_relevant_history(&dir)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(format!("{SUMMARY}\n"))
        .stderr(predicate::str::contains("resolving entry point"));
}

#[test]
fn test_broken_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".git-relevant-history.toml"), "[log\n").unwrap();

    git_relevant_history(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    git_relevant_history(&dir)
        .args(["--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}
