// Integration tests for the ecoscan CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and argument validation.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the ecoscan binary.
fn ecoscan() -> Command {
    Command::cargo_bin("ecoscan").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    ecoscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecoscan"));
}

#[test]
fn cli_help_flag() {
    ecoscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eco-score"));
}

#[test]
fn cli_requires_subcommand() {
    ecoscan()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn score_rejects_guess_above_range() {
    ecoscan()
        .args(["score", "--name", "cup", "--guess", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("101"));
}

#[test]
fn score_explain_requires_guess() {
    // the explanation is only revealed after the accuracy block
    ecoscan()
        .args(["score", "--name", "cup", "--explain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    ecoscan()
        .args(["-q", "-v", "keywords"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
