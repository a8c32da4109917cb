//! Records held by the remote store: reported links and their sources

mod link;
mod source;

pub use link::{LinkDraft, LinkRecord, Severity, SourceType, Status};
pub use source::{SourceRecord, AUTO_SOURCE_NOTE, UNDETERMINED_SOURCE_TYPE};
