//! Payment Model

use crate::response::{DeleteResult, InsertResult};
use serde::{Deserialize, Serialize};

/// Fulfillment state of a settled payment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PaymentStatus {
    #[default]
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Delivered")]
    Delivered,
}

/// Settled payment (an "order" for the admin views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub email: String,
    /// Amount charged in major units
    pub price: f64,
    /// Provider transaction reference (unique)
    pub transaction_id: String,
    pub date: String,
    /// Cart entries cleared by this payment
    #[cfg_attr(feature = "db", sqlx(json))]
    pub cart_ids: Vec<i64>,
    /// Menu items bought, one entry per line item
    #[cfg_attr(feature = "db", sqlx(json))]
    pub menu_item_ids: Vec<i64>,
    pub status: PaymentStatus,
    pub created_at: i64,
}

/// Settlement payload of `POST /payments`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    /// Client-side payment date; defaults to now
    pub date: Option<String>,
    #[serde(default)]
    pub cart_ids: Vec<i64>,
    #[serde(default)]
    pub menu_item_ids: Vec<i64>,
}

/// Combined result of a settlement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    pub payment_result: InsertResult,
    pub delete_result: DeleteResult,
}

/// Payload of `POST /create-payment-intent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    /// Price in major units
    pub price: f64,
}

/// Response of `POST /create-payment-intent`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}
