use crate::cli::support::{linkwatch_with_store, read_store, seed_duplicates};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Add command tests
// ============================================================================

#[test]
fn test_add_creates_store_and_source() {
    let dir = tempdir().unwrap();

    linkwatch_with_store(&dir)
        .args([
            "add",
            "https://facebook.com/post/77",
            "--source",
            "https://facebook.com/poster",
            "--severity",
            "high",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added https://facebook.com/post/77"));

    let store = read_store(&dir);
    let link = &store["links"][0];
    assert!(!link["id"].as_str().unwrap().is_empty());
    assert!(!link["detectedAt"].as_str().unwrap().is_empty());
    assert_eq!(link["severity"], "Cao");
    assert_eq!(link["status"], "Chưa xử lý");

    let source = &store["sources"][0];
    assert_eq!(source["profileUrl"], "https://facebook.com/poster");
    assert_eq!(source["negativePostCount"], 1);
}

#[test]
fn test_add_rejects_cosmetic_duplicate() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args([
            "add",
            "HTTPS://www.tiktok.com/@someone/video/9/?fbclid=abc",
            "--source",
            "someone",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already tracked as other"));

    assert_eq!(read_store(&dir)["links"].as_array().unwrap().len(), 3);
}

#[test]
fn test_add_duplicate_json_error_names_existing_record() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args([
            "--format",
            "json",
            "add",
            "facebook.com/post/1",
            "--source",
            "someone",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"duplicate_url\""))
        .stderr(predicate::str::contains("\"canonical\":\"https://facebook.com/post/1\""));
}

#[test]
fn test_add_blank_source_is_rejected_before_write() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["add", "https://x.com/new", "--source", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("source is required"));

    assert_eq!(read_store(&dir)["links"].as_array().unwrap().len(), 3);
}

#[test]
fn test_add_invalid_severity_exit_code_2() {
    let dir = tempdir().unwrap();
    linkwatch_with_store(&dir)
        .args(["add", "https://x.com/new", "--source", "s", "--severity", "extreme"])
        .assert()
        .code(2);
}

#[test]
fn test_update_changes_fields_but_not_detection_time() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["update", "other", "--status", "done", "--notes", "reported"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated other"));

    let store = read_store(&dir);
    let link = store["links"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["id"] == "other")
        .unwrap()
        .clone();
    assert_eq!(link["status"], "Đã xử lý");
    assert_eq!(link["actionNotes"], "reported");
    assert_eq!(link["detectedAt"], "2024-02-01T08:00:00.000Z");
}

#[test]
fn test_update_unknown_id_exit_code_3() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["update", "missing", "--status", "done"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("link not found: missing"));
}
