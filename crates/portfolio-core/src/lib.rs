//! portfolio-core: record store and query engine for portfolio.
//!
//! This crate holds everything with real logic in it: the loaded
//! [`RecordStore`], the accessor and technique-statistics views, and the
//! search pipeline. The HTTP layer and the binary consume it through
//! [`Catalog`] or the free functions re-exported here.
//!
//! # Architecture
//!
//! ```text
//! JSON source ──► RecordStore ──► Accessor / Stats / Search ──► Catalog ──► Web, CLI
//!                                                                  │
//!                                                                  └──► QueryObserver (logs)
//! ```
//!
//! All query functions are synchronous and pure; a store is loaded per
//! request and never mutated.

pub mod accessor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod observer;
pub mod search;
pub mod sort;
pub mod stats;
pub mod store;
pub mod types;

pub use accessor::{count, distinct_tags, get};
pub use catalog::Catalog;
pub use error::{LoadError, QueryError};
pub use observer::{QueryEvent, QueryObserver, TracingObserver};
pub use search::{search, SearchQuery};
pub use sort::{NumberKey, SortKey, SortOrder};
pub use stats::{tag_stats, technique_projects};
pub use store::RecordStore;
pub use types::{FieldRef, Project, ProjectRef};
