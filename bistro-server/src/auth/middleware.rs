//! Authentication middleware
//!
//! Guard chain: `require_auth` verifies the bearer token, `require_admin`
//! then checks the stored role of that identity.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::AppError;

use super::{AuthIdentity, JwtError, JwtService};
use crate::db::repository::user;
use crate::security_log;
use crate::state::AppState;

/// Token guard
///
/// | Case | Status |
/// |------|--------|
/// | no `Authorization` header | 401 |
/// | header without a bearer token | 401 |
/// | bad signature / expired | 403 |
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => match JwtService::extract_from_header(header) {
            Some(token) => token,
            None => {
                security_log!("WARN", "auth_malformed", uri = req.uri().to_string());
                return Err(AppError::unauthorized());
            }
        },
        None => {
            security_log!("WARN", "auth_missing", uri = req.uri().to_string());
            return Err(AppError::unauthorized());
        }
    };

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            req.extensions_mut().insert(AuthIdentity::from(claims));
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                uri = req.uri().to_string()
            );
            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Forbidden access")),
            }
        }
    }
}

/// Admin guard
///
/// Looks up the stored user for the verified email; anything but an
/// `admin` role is 403. Without an identity (guard mis-ordered) it is 401.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = req
        .extensions()
        .get::<AuthIdentity>()
        .ok_or_else(AppError::unauthorized)?;

    let is_admin = user::find_by_email(&state.pool, &identity.email)
        .await?
        .is_some_and(|u| u.role.is_admin());

    if !is_admin {
        security_log!("WARN", "admin_required", email = identity.email.clone());
        return Err(AppError::admin_required());
    }

    Ok(next.run(req).await)
}
