//! Catalog: the store plus an optional observer, exposing every core
//! operation as a method.
//!
//! The free functions in [`accessor`](crate::accessor),
//! [`stats`](crate::stats) and [`search`](crate::search) stay pure; the
//! catalog calls them and then reports what happened.

use crate::accessor;
use crate::error::QueryError;
use crate::observer::{QueryEvent, QueryObserver};
use crate::search::{self, SearchQuery};
use crate::stats;
use crate::store::RecordStore;
use crate::types::{Project, ProjectRef};
use std::collections::BTreeMap;

/// Read-only view over a [`RecordStore`] for one request.
#[derive(Clone, Copy)]
pub struct Catalog<'a> {
    store: &'a RecordStore,
    observer: Option<&'a dyn QueryObserver>,
}

impl<'a> Catalog<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn QueryObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn store(&self) -> &'a RecordStore {
        self.store
    }

    pub fn count(&self) -> usize {
        let total = accessor::count(self.store);
        self.notify(QueryEvent::Count { total });
        total
    }

    pub fn get(&self, project_no: i64) -> Option<&'a Project> {
        let project = accessor::get(self.store, project_no);
        self.notify(QueryEvent::Get {
            project_no,
            found: project.is_some(),
        });
        project
    }

    pub fn techniques(&self) -> Vec<String> {
        let tags = accessor::distinct_tags(self.store);
        self.notify(QueryEvent::Techniques { total: tags.len() });
        tags
    }

    pub fn technique_stats(&self) -> BTreeMap<String, Vec<ProjectRef>> {
        let stats = stats::tag_stats(self.store);
        self.notify(QueryEvent::TechniqueStats {
            techniques: stats.len(),
        });
        stats
    }

    pub fn technique(&self, technique: &str) -> Option<Vec<ProjectRef>> {
        let refs = stats::technique_projects(self.store, technique);
        self.notify(QueryEvent::Technique {
            technique,
            projects: refs.as_ref().map(Vec::len),
        });
        refs
    }

    pub fn search(&self, query: &SearchQuery) -> Result<Vec<&'a Project>, QueryError> {
        let result = search::search(self.store, query);
        self.notify(QueryEvent::Search {
            text: query.needle(),
            sort_by: &query.sort_by,
            sort_order: query.sort_order,
            hits: result.as_ref().ok().map(Vec::len),
        });
        result
    }

    fn notify(&self, event: QueryEvent<'_>) {
        if let Some(observer) = self.observer {
            observer.observe(&event);
        }
    }
}

impl std::fmt::Debug for Catalog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("projects", &self.store.len())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}
