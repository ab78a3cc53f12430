//! User service
//!
//! Owns user records `{id, username, repos}` in memory. Listing returns raw
//! repo ids; fetching one user resolves them through the Repo service.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::router;
pub use state::AppState;
pub use store::UserStore;
