//! User service routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, state::AppState};

/// Build the User service router
///
/// `/user/{segment}` is shared: GET reads an id, POST expects
/// `username=<name>`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/user/{segment}",
            get(handlers::get_user).post(handlers::add_user),
        )
        .route("/users", get(handlers::list_users))
        .route("/user_repo/add", post(handlers::attach_repo))
        .with_state(state)
}
