//! Data models
//!
//! Shared between bistro-server and the web client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY). JSON uses camelCase.

pub mod cart_item;
pub mod menu_item;
pub mod payment;
pub mod reservation;
pub mod review;
pub mod stats;
pub mod user;

// Re-exports
pub use cart_item::*;
pub use menu_item::*;
pub use payment::*;
pub use reservation::*;
pub use review::*;
pub use stats::*;
pub use user::*;
