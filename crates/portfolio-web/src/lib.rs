//! portfolio-web: JSON HTTP routes over the portfolio query engine.
//!
//! The store is reloaded from disk on every request, so edits to the data
//! file show up without a restart and no state is shared between requests.

pub mod error;
pub mod routes;

pub use error::WebError;
pub use routes::SearchRequest;

use axum::routing::{get, post};
use axum::Router;
use portfolio_core::config::SearchConfig;
use portfolio_core::{Catalog, QueryObserver, RecordStore, TracingObserver};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    data_path: Arc<PathBuf>,
    search_defaults: Arc<SearchConfig>,
    observer: Arc<dyn QueryObserver>,
}

impl AppState {
    /// State serving `data_path` with default search settings and a
    /// [`TracingObserver`].
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: Arc::new(data_path.into()),
            search_defaults: Arc::new(SearchConfig::default()),
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_search_defaults(mut self, defaults: SearchConfig) -> Self {
        self.search_defaults = Arc::new(defaults);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn QueryObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn search_defaults(&self) -> &SearchConfig {
        &self.search_defaults
    }

    pub(crate) async fn load(&self) -> Result<RecordStore, WebError> {
        Ok(RecordStore::load_async(self.data_path.as_path()).await?)
    }

    pub(crate) fn catalog<'a>(&'a self, store: &'a RecordStore) -> Catalog<'a> {
        Catalog::new(store).with_observer(self.observer.as_ref())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("data_path", &self.data_path)
            .field("search_defaults", &self.search_defaults)
            .finish_non_exhaustive()
    }
}

/// Build the router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/list/", get(routes::list_projects))
        .route("/projects/{project_no}", get(routes::show_project))
        .route("/techniques/", get(routes::list_techniques))
        .route("/techniques/{technique}", get(routes::show_technique))
        .route("/search/", get(routes::search_form))
        .route("/search/results", post(routes::search_results))
        .fallback(routes::not_found)
        .with_state(state)
}

/// Serve the router on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, data = %state.data_path().display(), "serving portfolio");
    axum::serve(listener, router(state)).await
}
