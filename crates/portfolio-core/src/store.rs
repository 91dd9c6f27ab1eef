//! Store: the loaded, read-only snapshot of [`Project`] records.
//!
//! A store is built once per request (or command) from the JSON source and
//! discarded afterwards. Nothing in this crate mutates it after loading.

use crate::error::LoadError;
use crate::types::Project;
use std::collections::HashSet;
use std::path::Path;

/// Ordered collection of projects in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    projects: Vec<Project>,
}

impl RecordStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Parse a JSON array of project records.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let projects: Vec<Project> =
            serde_json::from_str(text).map_err(|source| LoadError::Parse { source })?;
        let store = Self::new(projects);
        store.warn_on_duplicate_ids();
        Ok(store)
    }

    /// Read and parse the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        });
        Self::finish_load(path, text)
    }

    /// Async variant of [`RecordStore::load`] for use inside request handlers.
    pub async fn load_async(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            });
        Self::finish_load(path, text)
    }

    fn finish_load(path: &Path, text: Result<String, LoadError>) -> Result<Self, LoadError> {
        match text.and_then(|text| Self::from_json_str(&text)) {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    projects = store.len(),
                    "loaded project data"
                );
                Ok(store)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "project data unavailable");
                Err(err)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }

    /// Identifiers that occur more than once, in first-repeat order.
    ///
    /// Duplicate ids break the store invariant; lookups still return the
    /// first match.
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.projects
            .iter()
            .map(|p| p.project_no)
            .filter(|id| !seen.insert(*id) && reported.insert(*id))
            .collect()
    }

    fn warn_on_duplicate_ids(&self) {
        let duplicates = self.duplicate_ids();
        if !duplicates.is_empty() {
            tracing::warn!(?duplicates, "project_no is not unique; lookups return the first match");
        }
    }
}

impl From<Vec<Project>> for RecordStore {
    fn from(projects: Vec<Project>) -> Self {
        Self::new(projects)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
