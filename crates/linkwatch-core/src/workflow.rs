//! Bulk deduplication
//!
//! Finds every redundant report and deletes them one at a time, in order.
//! Each delete is awaited before the next starts, and one failure does not
//! stop the rest.

use std::time::Instant;

use serde::Serialize;

use crate::dedup::find_duplicates;
use crate::delete::{delete_link, Attribution};
use crate::model::LinkRecord;
use crate::store::LinkStore;

/// A delete that the store did not accept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteFailure {
    pub link_id: String,
    pub url: String,
    pub error: String,
}

/// Per-item tally of a run that attempted at least one delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DedupReport {
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<DeleteFailure>,
}

/// Result of a bulk deduplication run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupOutcome {
    /// No duplicates were found; nothing was sent to the store
    NothingToDo,
    /// Deletes were attempted
    Completed(DedupReport),
}

impl DedupOutcome {
    pub fn succeeded(&self) -> usize {
        match self {
            DedupOutcome::NothingToDo => 0,
            DedupOutcome::Completed(report) => report.succeeded,
        }
    }

    pub fn failed(&self) -> usize {
        match self {
            DedupOutcome::NothingToDo => 0,
            DedupOutcome::Completed(report) => report.failed,
        }
    }

    /// The dataset changed, so callers should reload it
    pub fn needs_refresh(&self) -> bool {
        self.succeeded() > 0
    }

    pub fn failures(&self) -> &[DeleteFailure] {
        match self {
            DedupOutcome::NothingToDo => &[],
            DedupOutcome::Completed(report) => &report.failures,
        }
    }
}

/// Delete every redundant duplicate in `all_links`, sequentially.
pub fn deduplicate<S: LinkStore + ?Sized>(
    store: &S,
    all_links: &[LinkRecord],
    deleted_by: &Attribution,
) -> DedupOutcome {
    let start = Instant::now();
    let targets = find_duplicates(all_links);

    if targets.is_empty() {
        tracing::info!(total = all_links.len(), "dedup_nothing_to_do");
        return DedupOutcome::NothingToDo;
    }

    tracing::info!(
        total = all_links.len(),
        targets = targets.len(),
        deleted_by = deleted_by.as_str(),
        "dedup_start"
    );

    let mut report = DedupReport::default();
    for (position, record) in targets.iter().enumerate() {
        match delete_link(store, record, deleted_by) {
            Ok(()) => report.succeeded += 1,
            Err(e) => {
                report.failed += 1;
                report.failures.push(DeleteFailure {
                    link_id: record.id.clone(),
                    url: record.url.clone(),
                    error: e.to_string(),
                });
            }
        }
        tracing::debug!(
            done = position + 1,
            of = targets.len(),
            "dedup_progress"
        );
    }

    tracing::info!(
        succeeded = report.succeeded,
        failed = report.failed,
        elapsed = ?start.elapsed(),
        "dedup_finished"
    );
    DedupOutcome::Completed(report)
}
