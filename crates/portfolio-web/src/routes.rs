//! Route handlers. Every handler loads a fresh store, answers from it and
//! drops it.

use crate::error::WebError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use portfolio_core::config::SearchConfig;
use portfolio_core::{Project, ProjectRef, QueryError, SearchQuery};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub project_count: usize,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct TechniqueList {
    pub techniques: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TechniqueDetail {
    pub technique: String,
    pub techniques: Vec<String>,
    pub projects: Vec<ProjectRef>,
}

#[derive(Debug, Serialize)]
pub struct SearchForm {
    pub techniques: Vec<String>,
    pub technique_count: usize,
}

/// Body of `POST /search/results`. Field names follow the search form.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text search string.
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub search_fields: Option<Vec<String>>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub techniques: Option<Vec<String>>,
}

impl SearchRequest {
    /// Apply form conventions: blank strings and empty lists mean "not given".
    pub fn into_query(self, defaults: &SearchConfig) -> Result<SearchQuery, QueryError> {
        let sort_order = match self.sort_order.as_deref().map(str::trim) {
            Some(order) if !order.is_empty() => order.parse()?,
            _ => defaults.sort_order,
        };
        let sort_by = self
            .sort_by
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults.sort_by.clone());

        Ok(SearchQuery {
            sort_by,
            sort_order,
            techniques: self.techniques.filter(|t| !t.is_empty()),
            search: self.key.filter(|k| !k.is_empty()),
            search_fields: self.search_fields.filter(|f| !f.is_empty()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub search: String,
    pub count: usize,
    pub results: Vec<Project>,
}

pub async fn index(State(state): State<AppState>) -> Result<Json<ProjectList>, WebError> {
    list_projects(State(state)).await
}

pub async fn list_projects(State(state): State<AppState>) -> Result<Json<ProjectList>, WebError> {
    let store = state.load().await?;
    let project_count = state.catalog(&store).count();
    Ok(Json(ProjectList {
        project_count,
        projects: store.as_slice().to_vec(),
    }))
}

pub async fn show_project(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
) -> Result<Json<Project>, WebError> {
    let project_no: i64 = project_no.parse().map_err(|_| WebError::NotFound)?;
    let store = state.load().await?;
    state
        .catalog(&store)
        .get(project_no)
        .cloned()
        .map(Json)
        .ok_or(WebError::NotFound)
}

pub async fn list_techniques(
    State(state): State<AppState>,
) -> Result<Json<TechniqueList>, WebError> {
    let store = state.load().await?;
    Ok(Json(TechniqueList {
        techniques: state.catalog(&store).techniques(),
    }))
}

pub async fn show_technique(
    State(state): State<AppState>,
    Path(technique): Path<String>,
) -> Result<Json<TechniqueDetail>, WebError> {
    let store = state.load().await?;
    let catalog = state.catalog(&store);
    let projects = catalog.technique(&technique).ok_or(WebError::NotFound)?;
    Ok(Json(TechniqueDetail {
        techniques: catalog.techniques(),
        technique,
        projects,
    }))
}

pub async fn search_form(State(state): State<AppState>) -> Result<Json<SearchForm>, WebError> {
    let store = state.load().await?;
    let techniques = state.catalog(&store).techniques();
    Ok(Json(SearchForm {
        technique_count: techniques.len(),
        techniques,
    }))
}

pub async fn search_results(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResults>, WebError> {
    let query = request.into_query(state.search_defaults())?;
    let store = state.load().await?;
    let results: Vec<Project> = state
        .catalog(&store)
        .search(&query)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(SearchResults {
        search: query.search.unwrap_or_default(),
        count: results.len(),
        results,
    }))
}

pub async fn not_found() -> WebError {
    WebError::NotFound
}
