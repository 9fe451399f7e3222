//! Stripe integration via REST API (no SDK dependency)

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use thiserror::Error;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// Currency of every charge
pub const CURRENCY: &str = "usd";

/// Provider-side pending charge handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("payment provider rejected the request: {0}")]
    Rejected(String),
}

/// Charge-intent provider
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError>;
}

/// Stripe implementation of [`PaymentGateway`]
#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        let amount = amount_minor.to_string();
        let resp: serde_json::Value = self
            .client
            .post(format!("{STRIPE_API_BASE}/payment_intents"))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&[
                ("amount", amount.as_str()),
                ("currency", currency),
                ("payment_method_types[]", "card"),
            ])
            .send()
            .await?
            .json()
            .await?;

        match (resp["id"].as_str(), resp["client_secret"].as_str()) {
            (Some(id), Some(secret)) => Ok(PaymentIntent {
                id: id.to_string(),
                client_secret: secret.to_string(),
            }),
            _ => Err(GatewayError::Rejected(
                resp["error"]["message"]
                    .as_str()
                    .map(String::from)
                    .unwrap_or_else(|| resp.to_string()),
            )),
        }
    }
}

/// Convert a major-unit price to provider minor units (`trunc(price * 100)`).
///
/// Goes through `Decimal` so 19.99 becomes 1999 rather than 1998.
/// Returns `None` for negative or non-finite prices.
pub fn to_minor_units(price: f64) -> Option<i64> {
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    let cents = Decimal::from_f64(price)?.checked_mul(Decimal::ONE_HUNDRED)?;
    cents.trunc().to_i64()
}
