//! User service route handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use repohub_common::{
    required_id, required_param, EntityKind, HealthResponse, IdPath, ServiceError,
    ServiceResult, User, UserView,
};
use repohub_http::expand_repos;
use serde::Deserialize;

use crate::state::AppState;

/// Path prefix carrying the username on `POST /user/username=...`
const USERNAME_PREFIX: &str = "username=";

/// Query parameters for `POST /user_repo/add`
#[derive(Debug, Deserialize)]
pub struct AttachRepoQuery {
    pub username: Option<String>,
    pub repo_id: Option<String>,
}

/// `GET /user/{id}`: user with repo records in place of ids
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ServiceResult<Json<UserView>> {
    let user = state
        .store
        .get_user(user_id)
        .ok_or(ServiceError::NotFound(EntityKind::User))?;

    let repos = expand_repos(state.repos.as_ref(), user.repo_ids()).await?;
    Ok(Json(UserView::expand(user, repos)))
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list_users())
}

/// `POST /user/username={username}`
pub async fn add_user(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> ServiceResult<(StatusCode, Json<User>)> {
    let username = segment
        .strip_prefix(USERNAME_PREFIX)
        .filter(|name| !name.is_empty())
        .ok_or(ServiceError::MissingParameter("username"))?;

    let user = state.store.add_user(username);
    Ok((StatusCode::CREATED, Json(user)))
}

/// `POST /user_repo/add?username=...&repo_id=...`
pub async fn attach_repo(
    State(state): State<AppState>,
    Query(query): Query<AttachRepoQuery>,
) -> ServiceResult<Json<User>> {
    let username = required_param(query.username, "username")?;
    let repo_id = required_id(query.repo_id, "repo_id")?;

    state
        .store
        .attach_repo(&username, repo_id)
        .map(Json)
        .ok_or(ServiceError::NotFound(EntityKind::User))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.uptime.health())
}
