use crate::support::{namecat, setup_catalog};
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_events() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "syllables"])
        .assert()
        .success()
        .stderr(predicate::str::contains("catalog_loaded"));
}

#[test]
fn test_default_level_hides_debug_events() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .arg("syllables")
        .assert()
        .success()
        .stderr(predicate::str::contains("catalog_loaded").not());
}

#[test]
fn test_verbose_enables_debug_events() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["--verbose", "similar", "Philip"])
        .assert()
        .success()
        .stderr(predicate::str::contains("find_similar"));
}

#[test]
fn test_env_filter_overrides_flags() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .env("NAMECAT_LOG", "namecat=debug")
        .args(["--log-level", "warn", "syllables"])
        .assert()
        .success()
        .stderr(predicate::str::contains("catalog_loaded"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "syllables"])
        .assert()
        .success()
        .stderr(predicate::str::contains(r#""message":"catalog_loaded""#));
}
