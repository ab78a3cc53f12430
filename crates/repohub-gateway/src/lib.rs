//! API gateway
//!
//! Exposes the same routes as the three store services and relays each call
//! to exactly one of them. Upstream status codes and bodies pass through
//! unchanged; only URL composition happens here.

pub mod handlers;
pub mod relay;
pub mod routes;
pub mod state;

pub use relay::Backend;
pub use routes::router;
pub use state::AppState;
