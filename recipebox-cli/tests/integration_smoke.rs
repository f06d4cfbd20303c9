//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_run() {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_run_help() {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.arg("run").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-uri"))
        .stdout(predicate::str::contains("--skip-migrations"));
}

#[test]
fn test_run_without_database_uri_fails() {
    let dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    // Run outside the repo so no .env is picked up
    cmd.current_dir(dir).env_remove("DATABASE_URI").arg("run");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URI").or(predicate::str::contains("database-uri")));
}

#[test]
fn test_run_with_bad_database_uri_fails() {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.current_dir(std::env::temp_dir())
        .arg("run")
        .arg("--database-uri")
        .arg("not-a-database-uri");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database pool"));
}
