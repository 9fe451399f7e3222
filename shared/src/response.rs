//! Write-result response types
//!
//! Insert/update/delete endpoints answer with the acknowledgement shapes the
//! web client already consumes (`insertedId`, `matchedCount`, ...).

use serde::{Deserialize, Serialize};

/// Result of an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Option<i64>,
}

impl InsertResult {
    pub fn new(id: i64) -> Self {
        Self {
            acknowledged: true,
            inserted_id: Some(id),
        }
    }
}

/// Result of an update by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    /// Build from the number of rows touched by an `UPDATE ... WHERE id = ?`
    pub fn from_rows(rows: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: rows,
            modified_count: rows,
        }
    }
}

/// Result of a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: deleted,
        }
    }
}

/// Response of `POST /users`: either a fresh insert or the duplicate notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserInsertResult {
    Inserted(InsertResult),
    Exists {
        message: String,
        #[serde(rename = "insertedId")]
        inserted_id: Option<i64>,
    },
}

impl UserInsertResult {
    pub fn exists() -> Self {
        Self::Exists {
            message: "user already exists".to_string(),
            inserted_id: None,
        }
    }
}

/// Response of `POST /jwt`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response of `GET /users/admin/{email}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCheckResponse {
    pub admin: bool,
}
