//! Local JSON file store
//!
//! Implements the store side of the contract for offline use: id and
//! detection-time assignment, source intelligence, and soft delete into an
//! `archived` list.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::LinkStore;
use crate::delete::Attribution;
use crate::error::{LinkwatchError, Result};
use crate::model::{LinkRecord, SourceRecord};
use crate::sources::{record_link, SourceMatch};

/// A removed link, kept for audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedLink {
    pub link: LinkRecord,
    pub deleted_by: String,
    pub deleted_at: String,
}

/// On-disk layout of the store file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    links: Vec<LinkRecord>,
    #[serde(default)]
    sources: Vec<SourceRecord>,
    #[serde(default)]
    archived: Vec<ArchivedLink>,
}

/// Store backed by a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    source_match: SourceMatch,
    lock: Mutex<()>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file is missing
    pub fn open(path: PathBuf, source_match: SourceMatch) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            write_file(&path, &StoreFile::default())?;
            tracing::info!(path = %path.display(), "store_file_created");
        }

        Ok(Self {
            path,
            source_match,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Links removed through the delete path
    #[cfg(test)]
    pub fn archived(&self) -> Result<Vec<ArchivedLink>> {
        Ok(self.load()?.archived)
    }

    fn load(&self) -> Result<StoreFile> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoreFile::default());
        }
        serde_json::from_str(&content).map_err(|e| LinkwatchError::InvalidStoreFile {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Run `f` against the file contents and persist the result
    fn modify<T>(&self, f: impl FnOnce(&mut StoreFile) -> Result<T>) -> Result<T> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| LinkwatchError::Other("store file lock poisoned".to_string()))?;
        let mut file = self.load()?;
        let value = f(&mut file)?;
        write_file(&self.path, &file)?;
        Ok(value)
    }
}

fn write_file(path: &Path, file: &StoreFile) -> Result<()> {
    let content = serde_json::to_string_pretty(file)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl LinkStore for FileStore {
    fn get_links(&self) -> Result<Vec<LinkRecord>> {
        Ok(self.load()?.links)
    }

    fn get_sources(&self) -> Result<Vec<SourceRecord>> {
        Ok(self.load()?.sources)
    }

    fn add_link(&self, link: &LinkRecord) -> Result<LinkRecord> {
        link.validate()?;
        let policy = self.source_match;
        self.modify(|file| {
            let mut stored = link.clone();
            stored.id = ulid::Ulid::new().to_string();
            if stored.detected_at.trim().is_empty() {
                stored.detected_at = now_iso();
            }
            record_link(&mut file.sources, &stored, policy);
            file.links.push(stored.clone());
            Ok(stored)
        })
    }

    fn update_link(&self, link: &LinkRecord) -> Result<LinkRecord> {
        link.validate()?;
        self.modify(|file| {
            let existing = file
                .links
                .iter_mut()
                .find(|l| l.id == link.id)
                .ok_or_else(|| LinkwatchError::not_found("link", &link.id))?;
            let detected_at = existing.detected_at.clone();
            *existing = link.clone();
            existing.detected_at = detected_at;
            Ok(existing.clone())
        })
    }

    fn delete_link(&self, link: &LinkRecord, deleted_by: &Attribution) -> Result<()> {
        self.modify(|file| {
            let position = file
                .links
                .iter()
                .position(|l| l.id == link.id)
                .ok_or_else(|| LinkwatchError::not_found("link", &link.id))?;
            let removed = file.links.remove(position);
            file.archived.push(ArchivedLink {
                link: removed,
                deleted_by: deleted_by.to_string(),
                deleted_at: now_iso(),
            });
            Ok(())
        })
    }
}
