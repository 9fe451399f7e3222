//! Application state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::config::Config;
use crate::db::DbService;
use crate::email::Mailer;
use crate::stripe::{PaymentGateway, StripeGateway};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Cheap to clone; every handler receives it through `State`.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Token issue / verification
    pub jwt: JwtService,
    /// Charge-intent provider
    pub payments: Arc<dyn PaymentGateway>,
    /// Transactional mail, absent when not configured
    pub mailer: Option<Mailer>,
}

impl AppState {
    /// Open the database and wire the production collaborators
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let db = DbService::new(&config.database_url).await?;

        let mailer = match (&config.mailgun_api_key, &config.mailgun_domain) {
            (Some(key), Some(domain)) => Some(Mailer::new(key, domain, &config.mail_from)),
            _ => {
                tracing::warn!("MAILGUN_API_KEY / MAILGUN_DOMAIN not set, outgoing mail disabled");
                None
            }
        };

        Ok(Self::from_parts(
            db.pool,
            JwtService::new(&config.jwt_secret),
            Arc::new(StripeGateway::new(&config.stripe_secret_key)),
            mailer,
        ))
    }

    /// Assemble state from ready-made parts
    pub fn from_parts(
        pool: SqlitePool,
        jwt: JwtService,
        payments: Arc<dyn PaymentGateway>,
        mailer: Option<Mailer>,
    ) -> Self {
        Self {
            pool,
            jwt,
            payments,
            mailer,
        }
    }
}
