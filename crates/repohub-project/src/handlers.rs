//! Project service route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use repohub_common::{
    required_id, required_param, EntityKind, HealthResponse, IdPath, Project, ProjectView,
    ServiceError, ServiceResult,
};
use repohub_http::expand_repos;
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for `POST /project/add`
#[derive(Debug, Deserialize)]
pub struct AddProjectQuery {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Query parameters for `POST /project_repo/add`
#[derive(Debug, Deserialize)]
pub struct AttachRepoQuery {
    pub project_name: Option<String>,
    pub repo_id: Option<String>,
}

/// `GET /project/{id}`: project with repo records in place of ids
pub async fn get_project(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
) -> ServiceResult<Json<ProjectView>> {
    let project = state
        .store
        .get_project(project_id)
        .ok_or(ServiceError::NotFound(EntityKind::Project))?;

    let repos = expand_repos(state.repos.as_ref(), project.repo_ids()).await?;
    Ok(Json(ProjectView::expand(project, repos)))
}

/// `GET /projects`: repo lists stay as raw ids
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.store.list_projects())
}

/// `POST /project/add?name=...&type=...`
pub async fn add_project(
    State(state): State<AppState>,
    Query(query): Query<AddProjectQuery>,
) -> ServiceResult<(StatusCode, Json<Project>)> {
    let name = required_param(query.name, "name")?;
    let kind = required_param(query.kind, "type")?;

    let project = state.store.add_project(name, kind);
    Ok((StatusCode::CREATED, Json(project)))
}

/// `POST /project_repo/add?project_name=...&repo_id=...`
pub async fn attach_repo(
    State(state): State<AppState>,
    Query(query): Query<AttachRepoQuery>,
) -> ServiceResult<Json<Project>> {
    let project_name = required_param(query.project_name, "project_name")?;
    let repo_id = required_id(query.repo_id, "repo_id")?;

    state
        .store
        .attach_repo(&project_name, repo_id)
        .map(Json)
        .ok_or(ServiceError::NotFound(EntityKind::Project))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.uptime.health())
}
