use crate::cli::support::{linkwatch_with_store, seed_duplicates};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// List and sources command tests
// ============================================================================

#[test]
fn test_list_empty_store() {
    let dir = tempdir().unwrap();
    linkwatch_with_store(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No links found"));
}

#[test]
fn test_list_human_shows_labels() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("older [Chưa xử lý] [Trung bình]"))
        .stdout(predicate::str::contains("https://tiktok.com/@someone/video/9"));
}

#[test]
fn test_list_json_uses_wire_names() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    let output = linkwatch_with_store(&dir)
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let links: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(links.as_array().unwrap().len(), 3);
    assert_eq!(links[0]["id"], "newer");
    assert!(links[0].get("detectedAt").is_some());
}

#[test]
fn test_sources_ranked_by_count() {
    let dir = tempdir().unwrap();

    for (url, source) in [
        ("https://x.com/1", "https://fb.com/loud"),
        ("https://x.com/2", "https://www.fb.com/loud/"),
        ("https://x.com/3", "https://fb.com/quiet"),
    ] {
        linkwatch_with_store(&dir)
            .args(["add", url, "--source", source])
            .assert()
            .success();
    }

    let output = linkwatch_with_store(&dir)
        .args(["--format", "json", "sources"])
        .output()
        .unwrap();
    let sources: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sources.as_array().unwrap().len(), 2);
    assert_eq!(sources[0]["profileUrl"], "https://fb.com/loud");
    assert_eq!(sources[0]["negativePostCount"], 2);
    assert_eq!(sources[1]["negativePostCount"], 1);
}
