//! Project service routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, state::AppState};

/// Build the Project service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/project/add", post(handlers::add_project))
        .route("/project/{project_id}", get(handlers::get_project))
        .route("/projects", get(handlers::list_projects))
        .route("/project_repo/add", post(handlers::attach_repo))
        .with_state(state)
}
