//! Shared types for the Bistro backend
//!
//! Error types, data models, write-result structures and id/time
//! utilities used by the server crate and its tests.

pub mod error;
pub mod models;
pub mod response;
pub mod util;
