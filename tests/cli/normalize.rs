use crate::cli::support::linkwatch;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Normalize command tests
// ============================================================================

#[test]
fn test_normalize_collapses_cosmetic_variants() {
    let dir = tempdir().unwrap();
    linkwatch(&dir)
        .args([
            "normalize",
            "https://x.com/a?b=2&a=1",
            "http://www.x.com/a/?a=1&b=2&utm_source=ig",
        ])
        .assert()
        .success()
        .stdout("https://x.com/a?a=1&b=2\nhttps://x.com/a?a=1&b=2\n");
}

#[test]
fn test_normalize_needs_no_store() {
    let dir = tempdir().unwrap();
    linkwatch(&dir)
        .args(["--format", "json", "normalize", "facebook.com/post/1/"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"canonical\": \"https://facebook.com/post/1\"",
        ));
}

#[test]
fn test_normalize_requires_a_url() {
    let dir = tempdir().unwrap();
    linkwatch(&dir).arg("normalize").assert().code(2);
}
