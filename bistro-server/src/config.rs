//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:5174";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment: development | staging | production
    pub environment: String,
    /// HTTP port
    pub port: u16,
    /// SQLite connection URL
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Stripe secret key
    pub stripe_secret_key: String,
    /// Mailgun API key (mail disabled when unset)
    pub mailgun_api_key: Option<String>,
    /// Mailgun sending domain (mail disabled when unset)
    pub mailgun_domain: Option<String>,
    /// Sender address for outgoing mail
    pub mail_from: String,
    /// Allowed browser origins
    pub cors_origins: Vec<String>,
    /// Log filter level
    pub log_level: String,
    /// Directory for daily log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    fn optional(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|s| !s.trim().is_empty())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let port = match std::env::var("PORT") {
            Ok(p) => p
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a port number, got {p:?}"))?,
            Err(_) => 5000,
        };

        Ok(Self {
            port,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:bistro.db".into()),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            stripe_secret_key: Self::require_secret("STRIPE_SECRET_KEY", &environment)?,
            mailgun_api_key: Self::optional("MAILGUN_API_KEY"),
            mailgun_domain: Self::optional("MAILGUN_DOMAIN"),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Bistro <noreply@bistro.local>".into()),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
            ),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: Self::optional("LOG_DIR"),
            environment,
        })
    }

    /// Settings for tests and local tooling, no environment access
    pub fn for_tests() -> Self {
        Self {
            environment: "test".into(),
            port: 0,
            database_url: "sqlite::memory:".into(),
            jwt_secret: "test-jwt-secret-0123456789abcdef".into(),
            stripe_secret_key: "sk_test_unused".into(),
            mailgun_api_key: None,
            mailgun_domain: None,
            mail_from: "Bistro <noreply@bistro.local>".into(),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
