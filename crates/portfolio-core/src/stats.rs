//! Technique statistics: which projects reference each technique.
//!
//! Reference lists are in reverse store order (last-loaded first). That is
//! the established output order of this view, not a sort on any field.

use crate::accessor::distinct_tags;
use crate::store::RecordStore;
use crate::types::{Project, ProjectRef};
use std::collections::BTreeMap;

/// Map every technique to the projects that use it.
///
/// Keys iterate alphabetically; every value holds at least one reference.
pub fn tag_stats(store: &RecordStore) -> BTreeMap<String, Vec<ProjectRef>> {
    distinct_tags(store)
        .into_iter()
        .map(|tag| {
            let refs = refs_for(store, &tag);
            (tag, refs)
        })
        .collect()
}

/// References for a single technique, or `None` if no project uses it.
pub fn technique_projects(store: &RecordStore, technique: &str) -> Option<Vec<ProjectRef>> {
    let refs = refs_for(store, technique);
    (!refs.is_empty()).then_some(refs)
}

fn refs_for(store: &RecordStore, technique: &str) -> Vec<ProjectRef> {
    let mut refs: Vec<ProjectRef> = store
        .iter()
        .filter(|p| p.uses(technique))
        .map(Project::as_ref_entry)
        .collect();
    refs.reverse();
    refs
}
