use crate::cli::support::{linkwatch, seed_duplicates, store_path};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_store_from_config_file() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    let config = format!("store = {:?}\n", store_path(&dir).display().to_string());
    fs::write(config_dir.join("config.toml"), config).unwrap();

    linkwatch(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("older"));
}

#[test]
fn test_store_from_environment() {
    let dir = tempdir().unwrap();
    seed_duplicates(&dir);

    linkwatch(&dir)
        .env("LINKWATCH_STORE", store_path(&dir))
        .arg("duplicates")
        .assert()
        .success()
        .stdout(predicate::str::contains("remove newer"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempdir().unwrap();
    linkwatch(&dir)
        .args(["--config", "absent.toml", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "source_match = \"fuzzy\"\n").unwrap();

    linkwatch(&dir)
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
