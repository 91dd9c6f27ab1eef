//! Point lookups and simple aggregates over a [`RecordStore`].

use crate::store::RecordStore;
use crate::types::Project;
use std::collections::BTreeSet;

/// Number of projects in the store.
pub fn count(store: &RecordStore) -> usize {
    store.len()
}

/// The project whose `project_no` equals `id`, if any.
///
/// Linear scan; when the store holds duplicate ids the first one wins.
pub fn get(store: &RecordStore, id: i64) -> Option<&Project> {
    store.iter().find(|p| p.project_no == id)
}

/// Every technique used by any project, deduplicated and sorted ascending.
pub fn distinct_tags(store: &RecordStore) -> Vec<String> {
    store
        .iter()
        .flat_map(|p| p.techniques_used.iter())
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
