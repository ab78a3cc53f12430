//! Gateway routes, mirroring the union of the store services

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, state::AppState};

/// Build the gateway router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // User service
        .route(
            "/user/{segment}",
            get(handlers::get_user).post(handlers::add_user),
        )
        .route("/users", get(handlers::list_users))
        .route("/user_repo/add", post(handlers::attach_user_repo))
        // Project service
        .route("/project/add", post(handlers::add_project))
        .route("/project/{project_id}", get(handlers::get_project))
        .route("/projects", get(handlers::list_projects))
        .route("/project_repo/add", post(handlers::attach_project_repo))
        // Repo service
        .route("/repo/add", post(handlers::add_repo))
        .route("/repo/{repo_id}", get(handlers::get_repo))
        .route("/repos", get(handlers::list_repos))
        .with_state(state)
}
