use crate::cli::support::{linkwatch_with_store, read_store, seed_duplicates};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Delete command tests
// ============================================================================

#[test]
fn test_delete_with_flags_archives_record() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["delete", "other", "--by", "  Lan  ", "--confirm", "DELETE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted other"));

    let store = read_store(&dir);
    assert_eq!(store["links"].as_array().unwrap().len(), 2);
    assert_eq!(store["archived"][0]["link"]["id"], "other");
    assert_eq!(store["archived"][0]["deletedBy"], "Lan");
}

#[test]
fn test_delete_prompts_for_name_and_phrase() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["delete", "other"])
        .write_stdin("Lan\nDELETE\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Type DELETE to confirm"));

    assert_eq!(read_store(&dir)["archived"][0]["deletedBy"], "Lan");
}

#[test]
fn test_delete_blank_name_cancels_without_change() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["delete", "other", "--by", "   ", "--confirm", "DELETE"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cancelled"));

    let store = read_store(&dir);
    assert_eq!(store["links"].as_array().unwrap().len(), 3);
    assert!(store["archived"].as_array().unwrap().is_empty());
}

#[test]
fn test_delete_wrong_phrase_cancels_without_change() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["--format", "json", "delete", "other", "--by", "Lan", "--confirm", "delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"cancelled\""));

    assert_eq!(read_store(&dir)["links"].as_array().unwrap().len(), 3);
}

#[test]
fn test_delete_closed_stdin_cancels() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["delete", "other"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("cancelled"));

    assert_eq!(read_store(&dir)["links"].as_array().unwrap().len(), 3);
}

#[test]
fn test_delete_unknown_id_exit_code_3() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch_with_store(&dir)
        .args(["delete", "missing", "--by", "Lan", "--confirm", "DELETE"])
        .assert()
        .code(3);
}
