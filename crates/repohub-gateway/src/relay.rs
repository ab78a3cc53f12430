//! Request forwarding to the store services

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use repohub_common::{ServiceError, ServiceResult, UpstreamConfig};
use repohub_http::{HttpError, Method};
use tracing::debug;

use crate::state::AppState;

/// Store service a route belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    User,
    Project,
    Repo,
}

impl Backend {
    /// Base URL of this backend, without a trailing slash
    pub fn base_url(self, upstreams: &UpstreamConfig) -> &str {
        let url = match self {
            Backend::User => &upstreams.user_url,
            Backend::Project => &upstreams.project_url,
            Backend::Repo => &upstreams.repo_url,
        };
        url.trim_end_matches('/')
    }
}

/// Forward `method path_and_query` to `backend` and relay its answer
///
/// The upstream status, content type and body are returned as received.
/// Transport failures become 502.
pub async fn forward(
    state: &AppState,
    backend: Backend,
    method: Method,
    path_and_query: &str,
) -> ServiceResult<Response> {
    let url = format!("{}{}", backend.base_url(&state.upstreams), path_and_query);
    debug!(?backend, %method, %url, "Relaying request");

    let upstream = state.client.request(method, &url).await?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
    let content_type = upstream
        .headers()
        .get(repohub_http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let body = upstream.bytes().await.map_err(HttpError::from)?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
