//! Unified error handling
//!
//! Application-level error type and API response structure:
//! - [`AppError`] - application error enum, maps onto HTTP status codes
//! - [`AppResponse`] - uniform `{ success, data, error }` envelope
//!
//! Repository failures ([`RepoError`]) convert into [`AppError`] at the
//! handler boundary, so handlers can use `?` throughout.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::repository::RepoError;

/// Uniform API response envelope
///
/// ```json
/// { "success": true, "data": { ... } }
/// { "success": false, "error": "Not found: Product 7" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> AppResponse<T> {
    /// Successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Error response carrying a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    /// Target record does not exist (404)
    NotFound(String),

    #[error("Conflict: {0}")]
    /// Record already exists (409)
    Conflict(String),

    #[error("Limit reached: {0}")]
    /// Redemption limit exhausted (409)
    LimitReached(String),

    #[error("Validation failed: {0}")]
    /// Missing or malformed input field (422)
    Validation(String),

    #[error("Store error: {0}")]
    /// Key-value store unreachable or operation failed (500)
    Store(String),

    #[error("Internal server error: {0}")]
    /// Anything else (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::LimitReached(msg) => AppError::LimitReached(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Store(msg) => AppError::Store(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::LimitReached(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),

            // Store details stay in the log, not in the response body
            AppError::Store(msg) => {
                error!(target: "store", error = %msg, "Store error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Store error".to_string())
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(AppResponse::<()>::error(message))).into_response()
    }
}
