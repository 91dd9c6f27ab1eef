//! Error responses for the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_core::{LoadError, QueryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    /// Unknown route, project or technique.
    #[error("not found")]
    NotFound,
    /// The record source could not be loaded. The cause is logged, never sent.
    #[error("project data unavailable")]
    DataUnavailable(#[source] LoadError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound => StatusCode::NOT_FOUND,
            WebError::DataUnavailable(_) => StatusCode::BAD_REQUEST,
            WebError::Query(QueryError::InvalidSortOrder(_)) => StatusCode::BAD_REQUEST,
            WebError::Query(QueryError::IncomparableSortKeys { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl From<LoadError> for WebError {
    fn from(err: LoadError) -> Self {
        tracing::error!(error = %err, "cannot serve request without project data");
        WebError::DataUnavailable(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
