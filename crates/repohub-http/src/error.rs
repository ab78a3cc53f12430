//! HTTP client error types

use repohub_common::{logging::format_error, ServiceError};
use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP client errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed (connection refused, timeout, broken body)
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Unexpected HTTP status from an upstream service
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Whether the upstream could not be reached or answered with a server error
    pub fn is_unavailable(&self) -> bool {
        match self {
            HttpError::RequestFailed(_) => true,
            HttpError::HttpStatus { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}

impl From<HttpError> for ServiceError {
    fn from(err: HttpError) -> Self {
        if err.is_unavailable() {
            tracing::warn!(error = %format_error(&err), "Upstream call failed");
            ServiceError::UpstreamUnavailable
        } else {
            ServiceError::Internal(err.to_string())
        }
    }
}
