//! Gateway route handlers
//!
//! Id segments are parsed here so malformed ids never reach a backend. All
//! other paths and query strings are forwarded verbatim.

use axum::{
    extract::State,
    http::Uri,
    response::Response,
    Json,
};
use repohub_common::{HealthResponse, IdPath, ServiceResult};
use repohub_http::Method;

use crate::{
    relay::{forward, Backend},
    state::AppState,
};

fn path_and_query(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

async fn relay_uri(
    state: &AppState,
    backend: Backend,
    method: Method,
    uri: &Uri,
) -> ServiceResult<Response> {
    forward(state, backend, method, path_and_query(uri)).await
}

/// `GET /user/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ServiceResult<Response> {
    forward(&state, Backend::User, Method::GET, &format!("/user/{}", user_id)).await
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>, uri: Uri) -> ServiceResult<Response> {
    relay_uri(&state, Backend::User, Method::GET, &uri).await
}

/// `POST /user/username={username}`
pub async fn add_user(State(state): State<AppState>, uri: Uri) -> ServiceResult<Response> {
    relay_uri(&state, Backend::User, Method::POST, &uri).await
}

/// `POST /user_repo/add`
pub async fn attach_user_repo(State(state): State<AppState>, uri: Uri) -> ServiceResult<Response> {
    relay_uri(&state, Backend::User, Method::POST, &uri).await
}

/// `GET /project/{id}`
pub async fn get_project(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
) -> ServiceResult<Response> {
    forward(
        &state,
        Backend::Project,
        Method::GET,
        &format!("/project/{}", project_id),
    )
    .await
}

/// `GET /projects`
pub async fn list_projects(State(state): State<AppState>, uri: Uri) -> ServiceResult<Response> {
    relay_uri(&state, Backend::Project, Method::GET, &uri).await
}

/// `POST /project/add`
pub async fn add_project(State(state): State<AppState>, uri: Uri) -> ServiceResult<Response> {
    relay_uri(&state, Backend::Project, Method::POST, &uri).await
}

/// `POST /project_repo/add`
pub async fn attach_project_repo(
    State(state): State<AppState>,
    uri: Uri,
) -> ServiceResult<Response> {
    relay_uri(&state, Backend::Project, Method::POST, &uri).await
}

/// `GET /repo/{id}`
pub async fn get_repo(
    State(state): State<AppState>,
    IdPath(repo_id): IdPath,
) -> ServiceResult<Response> {
    forward(&state, Backend::Repo, Method::GET, &format!("/repo/{}", repo_id)).await
}

/// `GET /repos`
pub async fn list_repos(State(state): State<AppState>, uri: Uri) -> ServiceResult<Response> {
    relay_uri(&state, Backend::Repo, Method::GET, &uri).await
}

/// `POST /repo/add`
pub async fn add_repo(State(state): State<AppState>, uri: Uri) -> ServiceResult<Response> {
    relay_uri(&state, Backend::Repo, Method::POST, &uri).await
}

/// `GET /health`, answered by the gateway itself
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.uptime.health())
}
