use crate::cli::support::{linkwatch_with_store, read_store, seed_duplicates, seed_store};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Duplicates and dedup command tests
// ============================================================================

#[test]
fn test_duplicates_reports_kept_and_redundant() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .arg("duplicates")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://facebook.com/post/1"))
        .stdout(predicate::str::contains("keep   older"))
        .stdout(predicate::str::contains("remove newer"))
        .stdout(predicate::str::contains("1 redundant link(s) in 1 group(s)"));

    assert_eq!(read_store(&dir)["links"].as_array().unwrap().len(), 3);
}

#[test]
fn test_dedup_keeps_oldest_and_records_attribution() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["dedup", "--by", "Lan", "--confirm", "DEDUPLICATE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 duplicate(s), 0 failed"));

    let store = read_store(&dir);
    let ids: Vec<&str> = store["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["older", "other"]);
    assert_eq!(store["archived"][0]["link"]["id"], "newer");
    assert_eq!(store["archived"][0]["deletedBy"], "Lan");
}

#[test]
fn test_dedup_is_idempotent() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["dedup", "--by", "Lan", "--confirm", "DEDUPLICATE"])
        .assert()
        .success();

    linkwatch_with_store(&dir)
        .args(["--format", "json", "dedup", "--by", "Lan", "--confirm", "DEDUPLICATE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"nothing_to_do\""));
}

#[test]
fn test_dedup_nothing_to_do_does_not_prompt() {
    let dir = tempdir().unwrap();
    seed_store(
        &dir,
        serde_json::json!([
            {"id": "a", "url": "https://x.com/a", "source": "s", "detectedAt": "2024-01-01T00:00:00Z"},
            {"id": "b", "url": "https://x.com/b", "source": "s", "detectedAt": "2024-01-02T00:00:00Z"}
        ]),
    );

    linkwatch_with_store(&dir)
        .arg("dedup")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No duplicates found"))
        .stderr(predicate::str::contains("to confirm").not());
}

#[test]
fn test_dedup_wrong_phrase_deletes_nothing() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["dedup", "--by", "Lan", "--confirm", "DELETE"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cancelled"));

    let store = read_store(&dir);
    assert_eq!(store["links"].as_array().unwrap().len(), 3);
    assert!(store["archived"].as_array().unwrap().is_empty());
}

#[test]
fn test_dedup_json_report() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["--format", "json", "dedup", "--by", "Lan", "--confirm", "DEDUPLICATE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"completed\""))
        .stdout(predicate::str::contains("\"succeeded\": 1"))
        .stdout(predicate::str::contains("\"failed\": 0"));
}
