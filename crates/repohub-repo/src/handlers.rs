//! Repo service route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use repohub_common::{
    required_param, EntityKind, HealthResponse, IdPath, Repo, ServiceError, ServiceResult,
};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for `POST /repo/add`
#[derive(Debug, Deserialize)]
pub struct AddRepoQuery {
    pub name: Option<String>,
}

/// `GET /repo/{id}`
pub async fn get_repo(
    State(state): State<AppState>,
    IdPath(repo_id): IdPath,
) -> ServiceResult<Json<Repo>> {
    state
        .store
        .get_repo(repo_id)
        .map(Json)
        .ok_or(ServiceError::NotFound(EntityKind::Repo))
}

/// `GET /repos`
pub async fn list_repos(State(state): State<AppState>) -> Json<Vec<Repo>> {
    Json(state.store.list_repos())
}

/// `POST /repo/add?name=...`
pub async fn add_repo(
    State(state): State<AppState>,
    Query(query): Query<AddRepoQuery>,
) -> ServiceResult<(StatusCode, Json<Repo>)> {
    let name = required_param(query.name, "name")?;
    let repo = state.store.add_repo(name);
    Ok((StatusCode::CREATED, Json(repo)))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.uptime.health())
}
