// Tests for `kinscan home`.

use crate::common::{run_kinscan, write_config, write_gedcom, SAMPLE_GEDCOM};

#[test]
fn test_home_human() {
    let (dir, path) = write_gedcom(SAMPLE_GEDCOM);
    let out = run_kinscan(dir.path(), &["home", "-g", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "Home: @I1@ Tom Smith (b. 1902)\n");
}

#[test]
fn test_home_json() {
    let (dir, path) = write_gedcom(SAMPLE_GEDCOM);
    let out = run_kinscan(dir.path(), &["--json", "home", "-g", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["command"], "home");
    assert_eq!(v["home"]["id"], "@I1@");
}

#[test]
fn test_home_from_config_id() {
    let (dir, path) = write_gedcom(SAMPLE_GEDCOM);
    write_config(dir.path(), r#"{"home": {"strategy": "id", "id": "@I2@"}}"#);
    let out = run_kinscan(dir.path(), &["home", "-g", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("@I2@ John Smith"));
}

#[test]
fn test_home_empty_tree() {
    let (dir, path) = write_gedcom("0 HEAD\n0 TRLR\n");
    let out = run_kinscan(dir.path(), &["home", "-g", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "No home individual found.\n");
}
