use crate::support::{namecat, stdout_json};
use tempfile::tempdir;

#[test]
fn test_phonetic_checks() {
    let dir = tempdir().unwrap();

    namecat()
        .current_dir(dir.path())
        .args([
            "phonetic",
            "ih-LIZ-uh-beth",
            "--rhymes-with",
            "MER-uh-deth",
            "--starts-with",
            "LIZ",
            "--ends-with",
            "beth",
        ])
        .assert()
        .success()
        .stdout(
            "syllables: 4\nrhymes with MER-uh-deth: yes\nstarts with LIZ: no\nends with beth: yes\n",
        );
}

#[test]
fn test_phonetic_identical_does_not_rhyme() {
    let dir = tempdir().unwrap();

    namecat()
        .current_dir(dir.path())
        .args(["phonetic", "ROZE", "--rhymes-with", "roze"])
        .assert()
        .success()
        .stdout("syllables: 1\nrhymes with roze: no\n");
}

#[test]
fn test_phonetic_json() {
    let dir = tempdir().unwrap();

    let output = namecat()
        .current_dir(dir.path())
        .args(["--format", "json", "phonetic", "RIV-er", "--ends-with", "ER"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["syllables"], 2);
    assert_eq!(json["ends_with"]["matches"], true);
    assert!(json.get("rhymes_with").is_none());
}
