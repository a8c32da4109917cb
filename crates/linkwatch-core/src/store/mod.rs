//! Access to the remote link store
//!
//! The store owns every record. Clients read whole collections and issue one
//! write per action; ids and detection times are assigned on the store side.

mod file;
mod http;
mod wire;

use std::path::PathBuf;

use crate::config::Config;
use crate::delete::Attribution;
use crate::error::Result;
use crate::model::{LinkRecord, SourceRecord};

pub use file::{ArchivedLink, FileStore};
pub use http::HttpStore;
pub use wire::StoreAction;

/// Request/response contract of the link store
pub trait LinkStore {
    /// All live link records, in store order
    fn get_links(&self) -> Result<Vec<LinkRecord>>;

    /// All source records
    fn get_sources(&self) -> Result<Vec<SourceRecord>>;

    /// Create a link; `link.id` is empty. Returns the stored record.
    fn add_link(&self, link: &LinkRecord) -> Result<LinkRecord>;

    /// Replace a link by id. Returns the stored record.
    fn update_link(&self, link: &LinkRecord) -> Result<LinkRecord>;

    /// Archive a link, recording who removed it
    fn delete_link(&self, link: &LinkRecord, deleted_by: &Attribution) -> Result<()>;
}

impl<S: LinkStore + ?Sized> LinkStore for &S {
    fn get_links(&self) -> Result<Vec<LinkRecord>> {
        (**self).get_links()
    }

    fn get_sources(&self) -> Result<Vec<SourceRecord>> {
        (**self).get_sources()
    }

    fn add_link(&self, link: &LinkRecord) -> Result<LinkRecord> {
        (**self).add_link(link)
    }

    fn update_link(&self, link: &LinkRecord) -> Result<LinkRecord> {
        (**self).update_link(link)
    }

    fn delete_link(&self, link: &LinkRecord, deleted_by: &Attribution) -> Result<()> {
        (**self).delete_link(link, deleted_by)
    }
}

/// Store selected from a locator string
#[derive(Debug)]
pub enum AnyStore {
    Http(HttpStore),
    File(FileStore),
}

impl AnyStore {
    /// Human-readable description of where records live
    pub fn describe(&self) -> String {
        match self {
            AnyStore::Http(store) => store.endpoint().to_string(),
            AnyStore::File(store) => store.path().display().to_string(),
        }
    }
}

/// Open the store named by `locator`.
///
/// `http://` and `https://` locators use the web endpoint; anything else is a
/// path to a local JSON store file.
pub fn open_store(locator: &str, config: &Config) -> Result<AnyStore> {
    let locator = locator.trim();
    if locator.is_empty() {
        crate::bail_usage!("no store configured (use --store or set LINKWATCH_STORE)");
    }

    let lower = locator.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        tracing::debug!(endpoint = locator, "open_http_store");
        Ok(AnyStore::Http(HttpStore::new(locator, config.timeout())))
    } else {
        tracing::debug!(path = locator, "open_file_store");
        Ok(AnyStore::File(FileStore::open(
            PathBuf::from(locator),
            config.source_match,
        )?))
    }
}

impl LinkStore for AnyStore {
    fn get_links(&self) -> Result<Vec<LinkRecord>> {
        match self {
            AnyStore::Http(store) => store.get_links(),
            AnyStore::File(store) => store.get_links(),
        }
    }

    fn get_sources(&self) -> Result<Vec<SourceRecord>> {
        match self {
            AnyStore::Http(store) => store.get_sources(),
            AnyStore::File(store) => store.get_sources(),
        }
    }

    fn add_link(&self, link: &LinkRecord) -> Result<LinkRecord> {
        match self {
            AnyStore::Http(store) => store.add_link(link),
            AnyStore::File(store) => store.add_link(link),
        }
    }

    fn update_link(&self, link: &LinkRecord) -> Result<LinkRecord> {
        match self {
            AnyStore::Http(store) => store.update_link(link),
            AnyStore::File(store) => store.update_link(link),
        }
    }

    fn delete_link(&self, link: &LinkRecord, deleted_by: &Attribution) -> Result<()> {
        match self {
            AnyStore::Http(store) => store.delete_link(link, deleted_by),
            AnyStore::File(store) => store.delete_link(link, deleted_by),
        }
    }
}
