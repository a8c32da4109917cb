use crate::cli::support::linkwatch;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    linkwatch(&dir)
        .args(["--log-level", "debug", "normalize", "x.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    linkwatch(&dir)
        .args(["normalize", "x.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    linkwatch(&dir)
        .args(["--verbose", "normalize", "x.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_structured_lines() {
    let dir = tempdir().unwrap();
    linkwatch(&dir)
        .args(["--log-level", "debug", "--log-json", "normalize", "x.com"])
        .assert()
        .success()
        .stdout("https://x.com/\n")
        .stderr(predicate::str::contains("\"parse_args\""));
}
