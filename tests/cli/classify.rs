use crate::support::{namecat, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_classify_category_tiers() {
    let dir = tempdir().unwrap();

    let cases = [
        ("Nature > Botanical > Flowers", "Nature > Botanical > Flowers", "identical (category score 70)"),
        ("Nature > Botanical > Flowers", "Nature > Botanical > Trees", "sibling (category score 40)"),
        ("Nature", "Nature > Botanical", "parent-child (category score 30)"),
        ("Nature > Botanical > Flowers", "Nature > Elemental > Water", "cousin (category score 10)"),
        ("Nature > Botanical", "Virtue > Love", "unrelated (category score 0)"),
    ];

    for (a, b, expected) in cases {
        namecat()
            .current_dir(dir.path())
            .args(["classify", a, b])
            .assert()
            .success()
            .stdout(format!("{}\n", expected));
    }
}

#[test]
fn test_classify_origin_tiers() {
    let dir = tempdir().unwrap();

    namecat()
        .current_dir(dir.path())
        .args([
            "classify",
            "Europe > Western Europe > France",
            "Europe > Western Europe > Belgium",
            "--taxonomy",
            "origin",
        ])
        .assert()
        .success()
        .stdout("sibling (origin score 25)\n");
}

#[test]
fn test_classify_is_symmetric() {
    let dir = tempdir().unwrap();

    for (a, b) in [("Nature", "Nature > Botanical"), ("Nature > Botanical", "Nature")] {
        namecat()
            .current_dir(dir.path())
            .args(["--quiet", "classify", a, b])
            .assert()
            .success()
            .stdout("30\n");
    }
}

#[test]
fn test_classify_json() {
    let dir = tempdir().unwrap();

    let output = namecat()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "classify",
            "Asia > Eastern Asia > Korea",
            "Asia > Eastern Asia",
            "--taxonomy",
            "origin",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["relation"], "parent-child");
    assert_eq!(json["taxonomy"], "origin");
    assert_eq!(json["score"], 20);
    assert_eq!(json["depth_a"], 3);
    assert_eq!(json["depth_b"], 2);
}

#[test]
fn test_classify_unknown_taxonomy() {
    let dir = tempdir().unwrap();

    namecat()
        .current_dir(dir.path())
        .args(["classify", "a", "b", "--taxonomy", "colour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported taxonomy"));
}
