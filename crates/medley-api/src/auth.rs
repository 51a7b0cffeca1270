//! Request identity.
//!
//! Authentication itself lives upstream (gateway or reverse proxy); this
//! layer only reads the identity header the gateway injects and rejects
//! requests that lack it.

use axum::{extract::FromRequestParts, http::request::Parts};
use medley_core::AppError;
use uuid::Uuid;

use crate::error::HttpAppError;

/// Header carrying the authenticated user id, set by the upstream gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct UserContext {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for UserContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Missing authenticated user identity".to_string(),
                ))
            })?;

        let user_id = raw.parse::<Uuid>().map_err(|_| {
            HttpAppError(AppError::Unauthorized(
                "Malformed user identity header".to_string(),
            ))
        })?;

        Ok(UserContext { user_id })
    }
}
