//! Client-side controller: owns a store and the last-seen state
//!
//! Mutations go to the store first and are applied to local state only
//! once the store accepts them.

use std::time::Instant;

use chrono::Utc;

use crate::canonical::normalize;
use crate::dedup::find_existing;
use crate::delete::{self, Attribution};
use crate::error::{LinkwatchError, Result};
use crate::model::{LinkDraft, LinkRecord, SourceRecord};
use crate::sources::{find_source, SourceMatch};
use crate::state::AppState;
use crate::store::LinkStore;
use crate::trace_time;
use crate::workflow::{self, DedupOutcome};

pub struct Dashboard<S> {
    store: S,
    state: AppState,
    source_match: SourceMatch,
}

impl<S: LinkStore + Sync> Dashboard<S> {
    /// Wrap `store` with empty state; call [`Dashboard::refresh`] to load it
    pub fn new(store: S, source_match: SourceMatch) -> Self {
        Self {
            store,
            state: AppState::default(),
            source_match,
        }
    }

    /// Open and load in one step
    pub fn load(store: S, source_match: SourceMatch) -> Result<Self> {
        let mut dashboard = Self::new(store, source_match);
        dashboard.refresh()?;
        Ok(dashboard)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.state.links
    }

    pub fn sources(&self) -> &[SourceRecord] {
        &self.state.sources
    }

    /// Reload both collections. Both reads run concurrently; if either
    /// fails the current state is left as it was.
    pub fn refresh(&mut self) -> Result<()> {
        let start = Instant::now();
        let store = &self.store;
        let (links, sources) = std::thread::scope(|scope| {
            let links = scope.spawn(|| store.get_links());
            let sources = store.get_sources();
            let links = links
                .join()
                .unwrap_or_else(|_| Err(LinkwatchError::Other("link read panicked".to_string())));
            (links, sources)
        });

        let links = links?;
        let sources = sources?;
        trace_time!(start, "refresh", links = links.len(), sources = sources.len());
        self.state.replace_all(links, sources);
        Ok(())
    }

    /// Validate, reject duplicates of tracked links, then store the draft
    pub fn create_link(&mut self, draft: LinkDraft) -> Result<LinkRecord> {
        draft.validate()?;

        if let Some(existing) = find_existing(&self.state.links, &draft.url) {
            return Err(LinkwatchError::DuplicateUrl {
                url: draft.url.trim().to_string(),
                canonical: normalize(&draft.url),
                existing_id: existing.id.clone(),
            });
        }

        let record = draft.into_record(Utc::now());
        let stored = self.store.add_link(&record)?;
        tracing::info!(link_id = stored.id.as_str(), url = stored.url.as_str(), "link_created");
        self.state.append_link(stored.clone());
        Ok(stored)
    }

    /// Store an edited record. The id and detection time of the tracked
    /// record are kept.
    pub fn update_link(&mut self, mut record: LinkRecord) -> Result<LinkRecord> {
        record.validate()?;
        let existing = self
            .state
            .link(&record.id)
            .ok_or_else(|| LinkwatchError::not_found("link", &record.id))?;
        record.detected_at = existing.detected_at.clone();

        let stored = self.store.update_link(&record)?;
        tracing::info!(link_id = stored.id.as_str(), "link_updated");
        self.state.replace_link(stored.clone());
        Ok(stored)
    }

    /// Delete the tracked link with `id`
    pub fn delete_link(&mut self, id: &str, deleted_by: &Attribution) -> Result<LinkRecord> {
        let record = self
            .state
            .link(id)
            .cloned()
            .ok_or_else(|| LinkwatchError::not_found("link", id))?;

        delete::delete_link(&self.store, &record, deleted_by)?;
        self.state.remove_link(id);
        Ok(record)
    }

    /// Remove every redundant duplicate, then reload if anything changed
    pub fn deduplicate(&mut self, deleted_by: &Attribution) -> DedupOutcome {
        let snapshot = self.state.links.clone();
        let outcome = workflow::deduplicate(&self.store, &snapshot, deleted_by);

        if outcome.needs_refresh() {
            if let Err(e) = self.refresh() {
                tracing::warn!(error = %e, "refresh_after_dedup_failed");
            }
        }
        outcome
    }

    /// The known source a link is attributed to
    pub fn source_for(&self, link: &LinkRecord) -> Option<&SourceRecord> {
        find_source(&self.state.sources, &link.source, self.source_match)
    }
}
