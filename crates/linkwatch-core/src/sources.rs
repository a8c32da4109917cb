//! Source intelligence: which accounts keep posting negative content
//!
//! A link is attributed to the source whose profile URL matches its `source`
//! field. Matching goes through the URL canonicalizer by default; the legacy
//! case-insensitive string comparison is still available.

use serde::{Deserialize, Serialize};

use crate::canonical::normalize;
use crate::model::{LinkRecord, SourceRecord};

/// How a link's `source` is matched against a source's `profile_url`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMatch {
    /// Compare canonical keys, like duplicate detection does
    #[default]
    Canonical,
    /// Case-insensitive string equality
    Exact,
}

impl SourceMatch {
    pub fn matches(&self, link_source: &str, profile_url: &str) -> bool {
        let exact = link_source.trim().to_lowercase() == profile_url.trim().to_lowercase();
        match self {
            SourceMatch::Exact => exact,
            SourceMatch::Canonical => {
                let canonical = normalize(link_source) == normalize(profile_url);
                if canonical != exact {
                    tracing::debug!(
                        link_source,
                        profile_url,
                        canonical,
                        exact,
                        "source_match_policies_disagree"
                    );
                }
                canonical
            }
        }
    }
}

/// The source a link is attributed to
pub fn find_source<'a>(
    sources: &'a [SourceRecord],
    link_source: &str,
    policy: SourceMatch,
) -> Option<&'a SourceRecord> {
    sources
        .iter()
        .find(|source| policy.matches(link_source, &source.profile_url))
}

/// Count a newly created link against its source, creating the source if unseen.
///
/// Returns the id of the source that was credited.
pub fn record_link(
    sources: &mut Vec<SourceRecord>,
    link: &LinkRecord,
    policy: SourceMatch,
) -> String {
    if let Some(source) = sources
        .iter_mut()
        .find(|source| policy.matches(&link.source, &source.profile_url))
    {
        source.negative_post_count += 1;
        tracing::debug!(
            source_id = source.id.as_str(),
            count = source.negative_post_count,
            "source_count_incremented"
        );
        return source.id.clone();
    }

    let source = SourceRecord::discovered(ulid::Ulid::new().to_string(), &link.source);
    tracing::debug!(
        source_id = source.id.as_str(),
        profile_url = link.source.as_str(),
        "source_discovered"
    );
    let id = source.id.clone();
    sources.push(source);
    id
}

/// Sources ordered by negative post count, highest first
pub fn ranked(sources: &[SourceRecord]) -> Vec<&SourceRecord> {
    let mut ranked: Vec<&SourceRecord> = sources.iter().collect();
    ranked.sort_by(|a, b| b.negative_post_count.cmp(&a.negative_post_count));
    ranked
}
