use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use tempfile::TempDir;

/// Fixture catalog shared by the command tests
pub const CATALOG: &str = r#"[
  {
    "id": "n1",
    "name": "Philip",
    "nameType": "firstName",
    "gender": "masculine",
    "origin": ["Europe > Southern Europe > Greece"],
    "roots": ["Greek: philos (love)"],
    "pronunciation": "FIL-ip"
  },
  {
    "id": "n2",
    "name": "Philomena",
    "gender": "feminine",
    "origin": ["Europe > Southern Europe > Greece"],
    "roots": ["Greek: philos (love)"]
  },
  {
    "id": "n3",
    "name": "Rose",
    "gender": "feminine",
    "origin": ["Europe > Western Europe > France"],
    "meanings": ["Nature > Botanical > Flowers"],
    "pronunciation": "ROZE"
  },
  {
    "id": "n4",
    "name": "River",
    "gender": "neutral",
    "origin": ["Europe > Northern Europe > Sweden"],
    "meanings": ["Nature > Elemental > Water"],
    "pronunciation": "RIV-er"
  },
  {
    "id": "n5",
    "name": "Kim",
    "nameType": "surname",
    "origin": ["Asia > Eastern Asia > Korea"],
    "pronunciation": "KIM",
    "status": "blocked"
  },
  {
    "id": "n6",
    "name": "Kim",
    "origin": ["Europe > Northern Europe > England"]
  },
  {
    "id": "n7",
    "name": "Elizabeth",
    "gender": "feminine",
    "pronunciation": "ih-LIZ-uh-beth",
    "relatedNames": [{"type": "alternateSpelling", "name": "Elisabeth"}]
  },
  {
    "id": "n8",
    "name": "Elisabeth",
    "gender": "feminine",
    "pronunciation": "ih-LIZ-uh-beth",
    "status": "used"
  }
]"#;

/// Get a Command for namecat with catalog and log overrides cleared
pub fn namecat() -> Command {
    let mut cmd = cargo_bin_cmd!("namecat");
    cmd.env_remove("NAMECAT_CATALOG").env_remove("NAMECAT_LOG");
    cmd
}

/// Create a temp dir holding the fixture catalog as `names.json`
pub fn setup_catalog() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("names.json"), CATALOG).unwrap();
    dir
}

/// Parse stdout of a finished command as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
