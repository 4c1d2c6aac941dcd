use crate::support::{namecat, setup_catalog, stdout_json};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_similar_shared_root_and_origin() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["similar", "Philip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Similar to Philip (threshold 60):"))
        .stdout(predicate::str::contains(
            " 125  Philomena  (shared root (greek: philos), related origin)",
        ))
        .stdout(predicate::str::contains("Rose").not());
}

#[test]
fn test_similar_lookup_by_id_and_case() {
    let dir = setup_catalog();

    for query in ["n1", "philip", "PHILIP"] {
        namecat()
            .current_dir(dir.path())
            .args(["similar", query])
            .assert()
            .success()
            .stdout(predicate::str::contains("Philomena"));
    }
}

#[test]
fn test_similar_json_output() {
    let dir = setup_catalog();

    let output = namecat()
        .current_dir(dir.path())
        .args(["--format", "json", "similar", "n1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["target"]["id"], "n1");
    assert_eq!(json["threshold"], 60);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "n2");
    assert_eq!(results[0]["score"], 125);
    assert_eq!(results[0]["reasons"][0], "shared root (greek: philos)");
    assert_eq!(
        results[0]["explanation"],
        "shared root (greek: philos), related origin"
    );
}

#[test]
fn test_similar_distant_names_need_low_threshold() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["similar", "River"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No names similar to River (threshold 60)"));

    // Kim (England) is a sibling origin at 25, Rose a category and origin cousin at 18
    namecat()
        .current_dir(dir.path())
        .args(["similar", "River", "--threshold", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  25  Kim  (related origin)\n  18  Rose  (similar category, related origin)",
        ));
}

#[test]
fn test_similar_limit() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["--quiet", "similar", "River", "--threshold", "10", "--limit", "1"])
        .assert()
        .success()
        .stdout("  25  Kim  (related origin)\n");
}

#[test]
fn test_similar_limit_zero_is_usage_error() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["similar", "River", "--limit", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid limit"));
}

#[test]
fn test_similar_false_cognate_not_reported() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["similar", "n5", "--threshold", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No names similar to Kim"));
}

#[test]
fn test_similar_declared_relation_not_reported() {
    let dir = setup_catalog();

    for query in ["Elizabeth", "Elisabeth"] {
        namecat()
            .current_dir(dir.path())
            .args(["--format", "json", "similar", query, "--threshold", "0"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""results": []"#));
    }
}

#[test]
fn test_similar_unknown_name_exit_code_3() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["similar", "Nobody"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("name not found: Nobody"));

    namecat()
        .current_dir(dir.path())
        .args(["--format", "json", "similar", "Nobody"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(r#""type":"name_not_found""#));
}

#[test]
fn test_similar_reads_config_threshold() {
    let dir = setup_catalog();
    fs::write(
        dir.path().join("namecat.toml"),
        "[similarity]\nthreshold = 130\n",
    )
    .unwrap();

    namecat()
        .current_dir(dir.path())
        .args(["similar", "Philip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No names similar to Philip (threshold 130)"));

    // an explicit --threshold wins over the file
    namecat()
        .current_dir(dir.path())
        .args(["similar", "Philip", "--threshold", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Philomena"));
}

#[test]
fn test_similar_explicit_config_tiers() {
    let dir = setup_catalog();
    fs::write(
        dir.path().join("strict.toml"),
        "[tiers.origin]\nexact = 0\nsibling = 0\nparent_child = 0\ncousin = 0\n",
    )
    .unwrap();

    namecat()
        .current_dir(dir.path())
        .args(["--config", "strict.toml", "similar", "Philip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  80  Philomena  (shared root (greek: philos))"));
}

#[test]
fn test_similar_bad_config_fails() {
    let dir = setup_catalog();
    fs::write(dir.path().join("namecat.toml"), "[similarity\n").unwrap();

    namecat()
        .current_dir(dir.path())
        .args(["similar", "Philip"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_catalog_flag_and_env() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("catalog.json"), crate::support::CATALOG).unwrap();

    namecat()
        .current_dir(dir.path())
        .args(["--catalog", "catalog.json", "similar", "Philip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Philomena"));

    namecat()
        .current_dir(dir.path())
        .env("NAMECAT_CATALOG", dir.path().join("catalog.json"))
        .args(["similar", "Philip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Philomena"));
}
