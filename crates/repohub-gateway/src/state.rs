//! Application state for the gateway

use std::sync::Arc;

use repohub_common::{ServiceKind, UpstreamConfig, Uptime};
use repohub_http::HttpClientTrait;

/// State shared across all gateway handlers
#[derive(Clone)]
pub struct AppState {
    /// Client used for every upstream call
    pub client: Arc<dyn HttpClientTrait>,
    /// Base URLs of the store services
    pub upstreams: Arc<UpstreamConfig>,
    pub uptime: Uptime,
}

impl AppState {
    pub fn new(client: Arc<dyn HttpClientTrait>, upstreams: UpstreamConfig) -> Self {
        Self {
            client,
            upstreams: Arc::new(upstreams),
            uptime: Uptime::start(ServiceKind::Gateway),
        }
    }
}
