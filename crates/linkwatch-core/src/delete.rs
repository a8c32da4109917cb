//! Audited deletion of link records
//!
//! Every delete needs an [`Attribution`] naming who performed it, and callers
//! collect an exact [`Confirmation`] phrase before issuing the request.

use std::fmt;

use crate::error::{LinkwatchError, Result};
use crate::model::LinkRecord;
use crate::store::LinkStore;

/// Phrase confirming a single delete
pub const DELETE_PHRASE: &str = "DELETE";

/// Phrase confirming a bulk deduplication run
pub const DEDUPLICATE_PHRASE: &str = "DEDUPLICATE";

/// Name of the person performing a delete, recorded with it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribution(String);

impl Attribution {
    /// Trim `raw`; an empty result cancels the delete.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            crate::bail_cancelled!("a name is required to attribute the deletion");
        }
        Ok(Attribution(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exact-match confirmation of a destructive action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Remove one record
    Delete,
    /// Remove every redundant duplicate
    Deduplicate,
}

impl Confirmation {
    /// The phrase the user must type
    pub fn phrase(&self) -> &'static str {
        match self {
            Confirmation::Delete => DELETE_PHRASE,
            Confirmation::Deduplicate => DEDUPLICATE_PHRASE,
        }
    }

    /// Accept only the exact phrase, case-sensitive. Leading and trailing
    /// whitespace (including the newline from a prompt) is the one thing
    /// stripped before comparing.
    pub fn check(&self, typed: Option<&str>) -> Result<()> {
        match typed.map(str::trim) {
            Some(typed) if typed == self.phrase() => Ok(()),
            Some("") | None => Err(LinkwatchError::cancelled(format!(
                "type {} to confirm",
                self.phrase()
            ))),
            Some(typed) => Err(LinkwatchError::cancelled(format!(
                "confirmation {:?} does not match {}",
                typed,
                self.phrase()
            ))),
        }
    }
}

/// Issue exactly one delete request for `record`.
///
/// No retry; a store or transport failure is returned to the caller.
pub fn delete_link<S: LinkStore + ?Sized>(
    store: &S,
    record: &LinkRecord,
    deleted_by: &Attribution,
) -> Result<()> {
    if !record.is_persisted() {
        crate::bail_invalid!("link", format!("{} has no store id", record.url));
    }

    match store.delete_link(record, deleted_by) {
        Ok(()) => {
            tracing::info!(
                link_id = record.id.as_str(),
                url = record.url.as_str(),
                deleted_by = deleted_by.as_str(),
                "link_deleted"
            );
            Ok(())
        }
        Err(e) => {
            tracing::warn!(
                link_id = record.id.as_str(),
                deleted_by = deleted_by.as_str(),
                error = %e,
                "link_delete_failed"
            );
            Err(e)
        }
    }
}
