//! Project service
//!
//! Owns project records `{id, name, type, repos}` in memory. Repo ids attached
//! to a project are stored as-is; fetching a single project resolves them
//! through the Repo service.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::router;
pub use state::AppState;
pub use store::ProjectStore;
