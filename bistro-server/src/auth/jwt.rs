//! JWT token service
//!
//! Issues and verifies the HS256 access tokens handed out by `POST /jwt`.
//! The caller's identity payload is embedded as-is next to `iat`/`exp`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Token lifetime
pub const TOKEN_TTL_HOURS: i64 = 3;

/// Claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity email (ownership key)
    pub email: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
    /// Remaining identity payload fields (name, photo, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Identity payload must be an object with a non-empty email")]
    MissingEmail,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService").field("ttl", &self.ttl).finish()
    }
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Sign a token for the given identity payload
    pub fn generate_token(&self, payload: &Value) -> Result<String, JwtError> {
        self.generate_token_at(payload, Utc::now())
    }

    fn generate_token_at(&self, payload: &Value, now: DateTime<Utc>) -> Result<String, JwtError> {
        let mut extra = payload.as_object().cloned().ok_or(JwtError::MissingEmail)?;
        let email = match extra.remove("email") {
            Some(Value::String(email)) if !email.trim().is_empty() => email,
            _ => return Err(JwtError::MissingEmail),
        };
        // Registered claims are always ours
        extra.remove("iat");
        extra.remove("exp");

        let claims = Claims {
            email,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            extra,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Verify signature and expiry (no leeway) and decode the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an `Authorization` header value
    ///
    /// Returns `None` unless the value is `Bearer <non-empty token>`.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> JwtService {
        JwtService::new("test-secret-with-enough-length-123456")
    }

    #[test]
    fn token_round_trips_identity() {
        let svc = service();
        let token = svc
            .generate_token(&json!({ "email": "a@x.com", "name": "Ana" }))
            .unwrap();
        let claims = svc.validate_token(&token).unwrap();

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.extra.get("name"), Some(&json!("Ana")));
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
    }

    #[test]
    fn expired_token_rejected() {
        let svc = service();
        let issued = Utc::now() - Duration::hours(TOKEN_TTL_HOURS) - Duration::seconds(5);
        let token = svc
            .generate_token_at(&json!({ "email": "a@x.com" }), issued)
            .unwrap();
        assert!(matches!(
            svc.validate_token(&token),
            Err(JwtError::ExpiredToken)
        ));
    }

    #[test]
    fn foreign_secret_rejected() {
        let token = JwtService::new("another-secret-entirely-000000000")
            .generate_token(&json!({ "email": "a@x.com" }))
            .unwrap();
        assert!(matches!(
            service().validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
        assert!(service().validate_token("not.a.token").is_err());
    }

    #[test]
    fn payload_without_email_rejected() {
        let svc = service();
        assert!(matches!(
            svc.generate_token(&json!({ "name": "Ana" })),
            Err(JwtError::MissingEmail)
        ));
        assert!(matches!(
            svc.generate_token(&json!("a@x.com")),
            Err(JwtError::MissingEmail)
        ));
    }

    #[test]
    fn payload_cannot_override_expiry() {
        let svc = service();
        let token = svc
            .generate_token(&json!({ "email": "a@x.com", "exp": 9_999_999_999i64 }))
            .unwrap();
        let claims = svc.validate_token(&token).unwrap();
        assert!(claims.exp < 9_999_999_999);
    }

    #[test]
    fn bearer_extraction() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
        assert_eq!(JwtService::extract_from_header("Bearer"), None);
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
