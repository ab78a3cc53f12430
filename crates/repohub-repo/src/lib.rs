//! Repo service
//!
//! Owns repo records `{id, name}` in memory and serves them over REST.
//! Project and User services resolve their repo lists against this service.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::router;
pub use state::AppState;
pub use store::RepoStore;
