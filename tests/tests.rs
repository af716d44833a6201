use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn jelly(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jelly"));
    cmd.env("HOME", home.path());
    cmd
}

fn log_lines(home: &TempDir, name: &str) -> Vec<String> {
    fs::read_to_string(home.path().join(".jelly").join(name))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_missing_log_name() {
    let home = TempDir::new().unwrap();

    jelly(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    assert!(!home.path().join(".jelly").exists());
}

#[test]
fn test_empty_log_name() {
    let home = TempDir::new().unwrap();

    jelly(&home)
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("log name provided is empty"));

    assert!(!home.path().join(".jelly").exists());
}

// ============================================================================
// File Layout Tests
// ============================================================================

#[test]
fn test_creates_log_under_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".jelly").join("app.log");

    jelly(&home)
        .arg("app")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));

    assert!(expected.is_file());
}

#[test]
fn test_suffix_not_duplicated() {
    let home = TempDir::new().unwrap();

    jelly(&home).arg("app.log").assert().success();

    assert!(home.path().join(".jelly").join("app.log").is_file());
    assert!(!home.path().join(".jelly").join("app.log.log").exists());
}

#[test]
fn test_previous_run_is_truncated() {
    let home = TempDir::new().unwrap();

    jelly(&home).args(["app", "first"]).assert().success();
    jelly(&home).args(["app", "second"]).assert().success();

    let lines = log_lines(&home, "app.log");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("INFO - started second "));
}

// ============================================================================
// Line Format Tests
// ============================================================================

#[test]
fn test_lines_carry_level_and_caller() {
    let home = TempDir::new().unwrap();

    jelly(&home).args(["app", "hello", "world"]).assert().success();

    let lines = log_lines(&home, "app.log");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(" main.rs:34 INFO - "));
    assert!(lines[1].contains(" main.rs:35 DEBUG - "));
    assert!(lines[2].contains(" main.rs:41 INFO - "));
    assert!(lines[0].ends_with(" INFO - started hello world "));
    assert!(lines[1].ends_with(" DEBUG - words 2 "));
    assert!(lines[2].ends_with(" INFO - finished "));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_failure_reported_on_stderr() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".jelly");
    fs::create_dir(&dir).unwrap();
    std::os::unix::fs::symlink("/dev/full", dir.join("app.log")).unwrap();

    jelly(&home)
        .args(["app", "hello"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to write log file"));
}

// ============================================================================
// Die Tests
// ============================================================================

#[test]
fn test_die_exits_with_status_one() {
    let home = TempDir::new().unwrap();

    jelly(&home)
        .args(["app", "boom", "--die"])
        .assert()
        .failure()
        .code(1);

    let lines = log_lines(&home, "app.log");
    assert_eq!(lines.len(), 3);
    assert!(lines[2].ends_with(" DIE - giving up boom "));
    assert!(!lines.iter().any(|line| line.contains("finished")));
}
