//! Reservation Model

use serde::{Deserialize, Serialize};

/// Booking lifecycle
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    #[default]
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Confirmed")]
    Confirmed,
    #[serde(alias = "Completed")]
    Completed,
    #[serde(alias = "Cancelled")]
    Cancelled,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    /// Owner email
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Booking date as entered (YYYY-MM-DD)
    pub date: String,
    pub time: String,
    /// Party size
    pub guests: i64,
    pub note: Option<String>,
    pub status: ReservationStatus,
    pub created_at: i64,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(alias = "partySize")]
    pub guests: i64,
    pub note: Option<String>,
}

/// Status change payload (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationStatusUpdate {
    pub status: ReservationStatus,
}
