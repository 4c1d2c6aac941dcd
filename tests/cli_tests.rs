//! Integration tests for the namecat CLI surface
//!
//! These tests run the namecat binary and check help, exit codes and
//! structured error output.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for namecat
fn namecat() -> Command {
    let mut cmd = cargo_bin_cmd!("namecat");
    cmd.env_remove("NAMECAT_CATALOG").env_remove("NAMECAT_LOG");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    namecat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: namecat"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("similar"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("duplicates"));
}

#[test]
fn test_version_flag() {
    namecat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("namecat"));
}

#[test]
fn test_subcommand_help() {
    namecat()
        .args(["similar", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Find names related to a catalog entry"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    namecat()
        .assert()
        .success()
        .stdout(predicate::str::contains("namecat"))
        .stdout(predicate::str::contains("namecat --help"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    namecat()
        .args(["--format", "invalid", "syllables"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_gender_exit_code_2() {
    namecat()
        .args(["list", "--gender", "plural"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_catalog_exit_code_2() {
    let dir = tempdir().unwrap();

    namecat()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no catalog found"));
}

#[test]
fn test_unreadable_catalog_exit_code_3() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("names.json"), "{").unwrap();

    namecat()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid catalog"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();

    namecat()
        .current_dir(dir.path())
        .args(["--quiet", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// JSON error envelope
// ============================================================================

#[test]
fn test_json_error_envelope_for_usage_error() {
    namecat()
        .args(["--format", "json", "list", "--gender", "plural"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""type":"usage_error""#));
}

#[test]
fn test_json_error_envelope_for_missing_catalog() {
    let dir = tempdir().unwrap();

    namecat()
        .current_dir(dir.path())
        .args(["--format", "json", "syllables"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""code":2"#))
        .stderr(predicate::str::contains("no catalog found"));
}
