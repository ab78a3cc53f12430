//! Service error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Kinds of records a service can fail to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Repo,
    Project,
    User,
}

impl EntityKind {
    /// Display name used in error bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Repo => "Repo",
            EntityKind::Project => "Project",
            EntityKind::User => "User",
        }
    }
}

/// Errors returned by service handlers
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{} not found", .0.as_str())]
    NotFound(EntityKind),

    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("upstream unavailable")]
    UpstreamUnavailable,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::MissingParameter(_) | ServiceError::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for handler operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Pull a required, non-empty query parameter
pub fn required_param(value: Option<String>, name: &'static str) -> ServiceResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::MissingParameter(name)),
    }
}

/// Pull a required query parameter and parse it as an id
pub fn required_id(value: Option<String>, name: &'static str) -> ServiceResult<u64> {
    let raw = required_param(value, name)?;
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::InvalidParameter { name, value: raw })
}
