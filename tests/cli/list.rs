use crate::support::{namecat, setup_catalog, stdout_json};
use predicates::prelude::*;

#[test]
fn test_list_all_in_catalog_order() {
    let dir = setup_catalog();

    let output = namecat()
        .current_dir(dir.path())
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["n1", "n2", "n3", "n4", "n5", "n6", "n7", "n8"]);
}

#[test]
fn test_list_category_matches_descendants() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["list", "--category", "Nature"])
        .assert()
        .success()
        .stdout("n3  Rose  [ROZE]\nn4  River  [RIV-er]\n");
}

#[test]
fn test_list_most_specific_origin_wins() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args([
            "list",
            "--origin",
            "Europe",
            "--origin",
            "Europe > Southern Europe",
        ])
        .assert()
        .success()
        .stdout("n1  Philip  [FIL-ip]\nn2  Philomena\n");
}

#[test]
fn test_list_origin_selector_is_not_a_text_prefix() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["list", "--origin", "Europe > Western"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No names found"));
}

#[test]
fn test_list_phonetic_filters() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["list", "--syllables", "2"])
        .assert()
        .success()
        .stdout("n1  Philip  [FIL-ip]\nn4  River  [RIV-er]\n");

    namecat()
        .current_dir(dir.path())
        .args(["--quiet", "list", "--rhymes-with", "MER-uh-deth"])
        .assert()
        .success()
        .stdout("n7  Elizabeth  [ih-LIZ-uh-beth]\nn8  Elisabeth  [ih-LIZ-uh-beth]\n");

    namecat()
        .current_dir(dir.path())
        .args(["list", "--starts-with", "ri"])
        .assert()
        .success()
        .stdout("n4  River  [RIV-er]\n");
}

#[test]
fn test_list_attribute_filters_combine() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .args(["list", "--gender", "feminine", "--status", "used"])
        .assert()
        .success()
        .stdout("n8  Elisabeth  [ih-LIZ-uh-beth]\n");

    namecat()
        .current_dir(dir.path())
        .args(["list", "--type", "firstName", "--origin", "Asia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No names found"));
}

#[test]
fn test_list_json() {
    let dir = setup_catalog();

    let output = namecat()
        .current_dir(dir.path())
        .args(["--format", "json", "list", "--status", "blocked"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["count"], 1);
    assert_eq!(json["names"][0]["id"], "n5");
    assert_eq!(json["names"][0]["nameType"], "surname");
    assert_eq!(json["names"][0]["status"], "blocked");
}

#[test]
fn test_syllables_options() {
    let dir = setup_catalog();

    namecat()
        .current_dir(dir.path())
        .arg("syllables")
        .assert()
        .success()
        .stdout("1\n2\n4\n");

    let output = namecat()
        .current_dir(dir.path())
        .args(["--format", "json", "syllables"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output), serde_json::json!([1, 2, 4]));
}
