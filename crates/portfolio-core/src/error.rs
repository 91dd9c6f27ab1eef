//! Error types for loading and querying the record store.

use std::path::PathBuf;
use thiserror::Error;

/// The record source could not be turned into a [`RecordStore`](crate::RecordStore).
///
/// Callers at the presentation boundary treat every variant the same way:
/// no partial data is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read project data from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse project data: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// A query could not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Values under the sort field are not mutually ordered (e.g. a number
    /// and a string). Indicates a data-quality problem in the source.
    #[error("cannot sort by `{field}`: {left} and {right} values are not comparable")]
    IncomparableSortKeys {
        field: String,
        left: &'static str,
        right: &'static str,
    },
    /// A sort direction other than `asc` or `desc`.
    #[error("invalid sort order `{0}`; expected asc or desc")]
    InvalidSortOrder(String),
}
