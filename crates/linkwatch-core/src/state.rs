//! In-memory view of the store's collections

use crate::model::{LinkRecord, SourceRecord};

/// Links and sources as last seen by this client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub links: Vec<LinkRecord>,
    pub sources: Vec<SourceRecord>,
}

impl AppState {
    pub fn new(links: Vec<LinkRecord>, sources: Vec<SourceRecord>) -> Self {
        Self { links, sources }
    }

    /// Put a newly stored link at the front, newest first
    pub fn append_link(&mut self, link: LinkRecord) {
        self.links.insert(0, link);
    }

    /// Replace the link with the same id. Returns false if none matched.
    pub fn replace_link(&mut self, link: LinkRecord) -> bool {
        match self.links.iter_mut().find(|l| l.id == link.id) {
            Some(existing) => {
                *existing = link;
                true
            }
            None => false,
        }
    }

    /// Drop the link with `id`, returning it
    pub fn remove_link(&mut self, id: &str) -> Option<LinkRecord> {
        let position = self.links.iter().position(|l| l.id == id)?;
        Some(self.links.remove(position))
    }

    pub fn replace_all(&mut self, links: Vec<LinkRecord>, sources: Vec<SourceRecord>) {
        self.links = links;
        self.sources = sources;
    }

    pub fn link(&self, id: &str) -> Option<&LinkRecord> {
        self.links.iter().find(|l| l.id == id)
    }
}
