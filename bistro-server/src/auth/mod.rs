//! Authentication and authorization
//!
//! - [`JwtService`]: token issue / verification
//! - [`require_auth`]: token guard, injects [`AuthIdentity`]
//! - [`require_admin`]: role guard, must be layered inside `require_auth`

mod extractor;
mod jwt;
mod middleware;

pub use jwt::{Claims, JwtError, JwtService, TOKEN_TTL_HOURS};
pub use middleware::{require_admin, require_auth};

use shared::error::{AppError, AppResult};

use crate::security_log;

/// Identity decoded from a verified token
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    pub email: String,
    pub claims: Claims,
}

impl From<Claims> for AuthIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email.clone(),
            claims,
        }
    }
}

impl AuthIdentity {
    /// Reject access to another identity's records
    pub fn ensure_self(&self, email: &str) -> AppResult<()> {
        if self.email != email {
            security_log!(
                "WARN",
                "identity_mismatch",
                caller = self.email.clone(),
                target = email.to_string()
            );
            return Err(AppError::identity_mismatch());
        }
        Ok(())
    }
}
