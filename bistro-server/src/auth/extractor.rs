//! AuthIdentity extractor
//!
//! Lets handlers take `identity: AuthIdentity` directly once `require_auth`
//! has run.

use axum::extract::FromRequestParts;
use http::request::Parts;
use shared::error::AppError;

use super::AuthIdentity;

impl<S> FromRequestParts<S> for AuthIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthIdentity>()
            .cloned()
            .ok_or_else(AppError::unauthorized)
    }
}
