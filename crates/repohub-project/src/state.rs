//! Application state for the Project service

use std::sync::Arc;

use repohub_common::{ServiceKind, Uptime};
use repohub_http::RepoDirectory;

use crate::store::ProjectStore;

/// State shared across all Project service handlers
#[derive(Clone)]
pub struct AppState {
    /// Project records
    pub store: Arc<ProjectStore>,
    /// Resolves repo ids when a single project is fetched
    pub repos: Arc<dyn RepoDirectory>,
    /// Start time for health reporting
    pub uptime: Uptime,
}

impl AppState {
    /// State with an empty store
    pub fn new(repos: Arc<dyn RepoDirectory>) -> Self {
        Self {
            store: Arc::new(ProjectStore::new()),
            repos,
            uptime: Uptime::start(ServiceKind::Project),
        }
    }
}
