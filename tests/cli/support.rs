use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for linkwatch, isolated from the user's config and store
pub fn linkwatch(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("linkwatch");
    cmd.current_dir(dir.path())
        .env("LINKWATCH_CONFIG_DIR", dir.path().join("config"))
        .env_remove("LINKWATCH_STORE")
        .env_remove("LINKWATCH_TIMEOUT")
        .env_remove("LINKWATCH_LOG");
    cmd
}

/// Path of the store file used by a test
pub fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("links.json")
}

/// Write a store file holding `links` (JSON objects in wire format)
pub fn seed_store(dir: &TempDir, links: serde_json::Value) {
    let content = serde_json::json!({
        "links": links,
        "sources": [],
        "archived": [],
    });
    fs::write(store_path(dir), serde_json::to_string_pretty(&content).unwrap()).unwrap();
}

/// Read the store file back
pub fn read_store(dir: &TempDir) -> serde_json::Value {
    let content = fs::read_to_string(store_path(dir)).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// A linkwatch command already pointed at the test store
pub fn linkwatch_with_store(dir: &TempDir) -> Command {
    let mut cmd = linkwatch(dir);
    cmd.arg("--store").arg(store_path(dir));
    cmd
}

/// Two reports of the same post plus one unrelated link
pub fn seed_duplicates(dir: &TempDir) {
    seed_store(
        dir,
        serde_json::json!([
            {
                "id": "newer",
                "url": "http://www.facebook.com/post/1/?utm_source=share",
                "source": "https://facebook.com/poster",
                "detectedAt": "2024-03-01T08:00:00.000Z"
            },
            {
                "id": "older",
                "url": "https://facebook.com/post/1",
                "source": "https://facebook.com/poster",
                "detectedAt": "2024-01-01T08:00:00.000Z"
            },
            {
                "id": "other",
                "url": "https://tiktok.com/@someone/video/9",
                "source": "https://tiktok.com/@someone",
                "detectedAt": "2024-02-01T08:00:00.000Z"
            }
        ]),
    );
}
