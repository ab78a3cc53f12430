//! Application state for the User service

use std::sync::Arc;

use repohub_common::{ServiceKind, Uptime};
use repohub_http::RepoDirectory;

use crate::store::UserStore;

/// State shared across all User service handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    /// Resolves repo ids when a single user is fetched
    pub repos: Arc<dyn RepoDirectory>,
    pub uptime: Uptime,
}

impl AppState {
    /// State with an empty store
    pub fn new(repos: Arc<dyn RepoDirectory>) -> Self {
        Self {
            store: Arc::new(UserStore::new()),
            repos,
            uptime: Uptime::start(ServiceKind::User),
        }
    }
}
