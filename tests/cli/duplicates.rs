use crate::support::{namecat, setup_catalog, stdout_json};
use predicates::prelude::*;

#[test]
fn test_duplicates_flags_false_cognates() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["duplicates", "kim", "--origin", "Asia > Eastern Asia > Korea"])
        .assert()
        .success()
        .stdout("n5  Kim\nn6  Kim  (false cognate: no shared origin)\n");
}

#[test]
fn test_duplicates_exclude_id() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args([
            "duplicates",
            "Kim",
            "--exclude-id",
            "n6",
            "--origin",
            "Asia > Eastern Asia > Korea",
        ])
        .assert()
        .success()
        .stdout("n5  Kim\n");
}

#[test]
fn test_duplicates_none() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["duplicates", "Zelda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No existing entries spelled Zelda"));
}

#[test]
fn test_duplicates_all_pairs() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .arg("duplicates")
        .assert()
        .success()
        .stdout("n5 Kim <-> n6 Kim  (false cognate: no shared origin)\n");
}

#[test]
fn test_duplicates_json() {
    let dir = setup_catalog();

    let output = namecat()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "duplicates",
            "Kim",
            "--origin",
            "Europe > Northern Europe > England",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let hits = json["duplicates"].as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["id"], "n5");
    assert_eq!(hits[0]["false_cognate"], true);
    assert_eq!(hits[1]["id"], "n6");
    assert_eq!(hits[1]["false_cognate"], false);
}
