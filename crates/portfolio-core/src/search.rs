//! Search layer: technique filtering, free-text matching and sorting
//! composed into a single query.
//!
//! Stages run in a fixed order:
//!
//! ```text
//! technique filter (AND) ──► text filter ──► sort (asc, then reverse for desc)
//! ```
//!
//! Every stored record is visited once, so a record can appear in the result
//! at most once. Two records with identical contents are still two results.

use crate::error::QueryError;
use crate::matching::{any_field_contains, any_named_field_contains, uses_all};
use crate::sort::{sort_projects, SortOrder};
use crate::store::RecordStore;
use crate::types::Project;

/// Default sort field.
pub const DEFAULT_SORT_BY: &str = "start_date";

/// Parameters of a [`search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Field to sort by. Records without it are left out of the result.
    pub sort_by: String,
    pub sort_order: SortOrder,
    /// Techniques every result must use. `None` disables the filter.
    pub techniques: Option<Vec<String>>,
    /// Free-text needle. `None` or an empty string disables the filter.
    pub search: Option<String>,
    /// Fields the text filter looks at. `None` means every field; an empty
    /// list matches nothing.
    pub search_fields: Option<Vec<String>>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::default(),
            techniques: None,
            search: None,
            search_fields: None,
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = field.into();
        self
    }

    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    pub fn techniques<I, S>(mut self, techniques: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.techniques = Some(techniques.into_iter().map(Into::into).collect());
        self
    }

    pub fn text(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// The effective text needle; empty strings count as absent.
    pub fn needle(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Run `query` against `store`.
///
/// Fails only when the values under `sort_by` cannot be ordered against each
/// other.
pub fn search<'s>(store: &'s RecordStore, query: &SearchQuery) -> Result<Vec<&'s Project>, QueryError> {
    let matched = filter(store, query);
    if matched.is_empty() {
        return Ok(matched);
    }
    sort_projects(matched, &query.sort_by, query.sort_order)
}

/// The filtering stages of [`search`], in store order.
pub fn filter<'s>(store: &'s RecordStore, query: &SearchQuery) -> Vec<&'s Project> {
    if matches!(query.search_fields.as_deref(), Some([])) {
        return Vec::new();
    }

    let techniques = query.techniques.as_deref();
    let tagged = store
        .iter()
        .filter(|p| techniques.map_or(true, |required| uses_all(p, required)));

    let Some(needle) = query.needle() else {
        return tagged.collect();
    };
    let needle = needle.to_lowercase();

    match query.search_fields.as_deref() {
        Some(fields) => tagged
            .filter(|p| any_named_field_contains(p, fields, &needle))
            .collect(),
        None => tagged.filter(|p| any_field_contains(p, &needle)).collect(),
    }
}
