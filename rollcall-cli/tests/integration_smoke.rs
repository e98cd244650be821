//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"))
        .stdout(predicate::str::contains("--bind"));
}

#[test]
fn test_migrate_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("rollcall.db");

    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .arg("migrate")
        .arg("--database-url")
        .arg(format!("sqlite://{}", db_path.display()));

    cmd.assert().success();
    assert!(db_path.exists());
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.arg("enroll");

    cmd.assert().failure();
}
