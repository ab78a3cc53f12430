//! Application state for the Repo service

use std::sync::Arc;

use repohub_common::{ServiceKind, Uptime};

use crate::store::RepoStore;

/// State shared across all Repo service handlers
#[derive(Clone)]
pub struct AppState {
    /// Repo records
    pub store: Arc<RepoStore>,
    /// Start time for health reporting
    pub uptime: Uptime,
}

impl AppState {
    /// State around a fresh, empty store
    pub fn new() -> Self {
        Self {
            store: Arc::new(RepoStore::new()),
            uptime: Uptime::start(ServiceKind::Repo),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
