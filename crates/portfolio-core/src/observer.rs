//! Observer: the logging seam of the query engine.
//!
//! [`Catalog`](crate::Catalog) notifies an optional [`QueryObserver`] after
//! every call. The engine never depends on an observer being installed.

use crate::sort::SortOrder;

/// One completed core call, described for a log sink.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent<'q> {
    Count { total: usize },
    Get { project_no: i64, found: bool },
    Techniques { total: usize },
    TechniqueStats { techniques: usize },
    Technique { technique: &'q str, projects: Option<usize> },
    Search {
        text: Option<&'q str>,
        sort_by: &'q str,
        sort_order: SortOrder,
        /// `None` when the query failed.
        hits: Option<usize>,
    },
}

impl std::fmt::Display for QueryEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryEvent::Count { total } => write!(f, "count: {total} projects"),
            QueryEvent::Get {
                project_no,
                found: true,
            } => write!(f, "get: returning project {project_no}"),
            QueryEvent::Get {
                project_no,
                found: false,
            } => write!(f, "get: no project with project_no {project_no}"),
            QueryEvent::Techniques { total } => write!(f, "techniques: {total} distinct"),
            QueryEvent::TechniqueStats { techniques } => {
                write!(f, "technique stats: {techniques} techniques")
            }
            QueryEvent::Technique {
                technique,
                projects: Some(n),
            } => write!(f, "technique {technique:?}: {n} projects"),
            QueryEvent::Technique {
                technique,
                projects: None,
            } => write!(f, "technique {technique:?}: unknown"),
            QueryEvent::Search {
                text,
                sort_by,
                sort_order,
                hits,
            } => {
                write!(
                    f,
                    "search: text={:?} by {sort_by} in {sort_order} order",
                    text.unwrap_or("")
                )?;
                match hits {
                    Some(n) => write!(f, " ({n} hits)"),
                    None => write!(f, " (failed)"),
                }
            }
        }
    }
}

/// Receives a notification after each core call.
pub trait QueryObserver: Send + Sync {
    fn observe(&self, event: &QueryEvent<'_>);
}

/// Emits every event as a `tracing` info event on the `portfolio::query` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl QueryObserver for TracingObserver {
    fn observe(&self, event: &QueryEvent<'_>) {
        tracing::info!(target: "portfolio::query", "{event}");
    }
}
