//! Binary smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_mentions_export_dir() {
    Command::cargo_bin("expenses")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expense tracker"))
        .stdout(predicate::str::contains("--export-dir"));
}

#[test]
fn test_version() {
    Command::cargo_bin("expenses")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses"));
}
