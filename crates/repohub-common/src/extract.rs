//! Request extractors with JSON rejections

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{error::ServiceError, models::EntityId};

/// Integer id from a single-segment path such as `/repo/{repo_id}`
///
/// Rejects with `ServiceError::InvalidParameter`, so a malformed id gets the
/// same `{"error": ...}` body as every other 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub EntityId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServiceError::InvalidParameter {
                name: "id",
                value: rejection.body_text(),
            })?;

        raw.parse()
            .map(IdPath)
            .map_err(|_| ServiceError::InvalidParameter {
                name: "id",
                value: raw,
            })
    }
}
