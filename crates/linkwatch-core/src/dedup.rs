//! Duplicate detection over link records
//!
//! Records are grouped by canonical URL key. Within a group the oldest report
//! (by `detected_at`) is kept and every other member is redundant.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::canonical::{normalize, same_link};
use crate::model::LinkRecord;

/// A set of records sharing one canonical key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Canonical key shared by every member
    pub key: String,
    /// The oldest report, which stays
    pub kept: LinkRecord,
    /// Newer reports of the same post, to be removed (oldest first)
    pub redundant: Vec<LinkRecord>,
}

/// Find every group with more than one member.
///
/// Groups are returned in the order their key is first encountered in
/// `records`. Members are ordered by detection time ascending; ties and
/// unparsable timestamps keep collection order, and unparsable timestamps
/// sort after every parseable one.
pub fn find_duplicate_groups(records: &[LinkRecord]) -> Vec<DuplicateGroup> {
    let mut order: Vec<(String, Vec<&LinkRecord>)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = normalize(&record.url);
        match slots.get(&key) {
            Some(&slot) => order[slot].1.push(record),
            None => {
                slots.insert(key.clone(), order.len());
                order.push((key, vec![record]));
            }
        }
    }

    order
        .into_iter()
        .filter_map(|(key, mut members)| {
            members.sort_by_key(|record| age_key(record.detected_instant()));
            let (kept, rest) = members.split_first()?;
            if rest.is_empty() {
                return None;
            }
            Some(DuplicateGroup {
                key,
                kept: (*kept).clone(),
                redundant: rest.iter().map(|record| (*record).clone()).collect(),
            })
        })
        .collect()
}

/// Records that are redundant copies of an older report.
///
/// Never includes the record kept for a group. Running this again on
/// `records` minus its result yields an empty list.
pub fn find_duplicates(records: &[LinkRecord]) -> Vec<LinkRecord> {
    find_duplicate_groups(records)
        .into_iter()
        .flat_map(|group| group.redundant)
        .collect()
}

/// The first existing record whose URL shares a canonical key with `url`
pub fn find_existing<'a>(records: &'a [LinkRecord], url: &str) -> Option<&'a LinkRecord> {
    records.iter().find(|record| same_link(&record.url, url))
}

/// Sort key placing parseable instants first, in ascending order
fn age_key(instant: Option<DateTime<Utc>>) -> (bool, Option<DateTime<Utc>>) {
    (instant.is_none(), instant)
}
