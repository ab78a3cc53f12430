//! Repo service routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, state::AppState};

/// Build the Repo service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/repo/add", post(handlers::add_repo))
        .route("/repo/{repo_id}", get(handlers::get_repo))
        .route("/repos", get(handlers::list_repos))
        .with_state(state)
}
