//! Application error type and its HTTP mapping.
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | [`AppError::Validation`] | 400 | `{"errors": [...]}` |
//! | [`AppError::InvalidId`] | 400 | `{"message": "id should be a number"}` |
//! | [`AppError::NotFound`] | 204 | `{"error": "Nothing found"}` |
//! | [`AppError::Store`] | 400 | `{"error": "Server Side Error"}` |
//! | [`AppError::Internal`] | 500 | `{"error": "Internal Server Error"}` |
//!
//! Not-found answers 204 rather than 404; clients of this API rely on it.
//! Store failures never expose their detail to the caller, it is logged instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const INVALID_ID_MESSAGE: &str = "id should be a number";
pub const NOT_FOUND_MESSAGE: &str = "Nothing found";
pub const STORE_ERROR_MESSAGE: &str = "Server Side Error";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("id should be a number")]
    InvalidId,

    #[error("Nothing found")]
    NotFound,

    #[error("store error: {message}")]
    Store { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidId | AppError::Store { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NO_CONTENT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation { errors } => json!({ "errors": errors }),
            AppError::InvalidId => json!({ "message": INVALID_ID_MESSAGE }),
            AppError::NotFound => json!({ "error": NOT_FOUND_MESSAGE }),
            AppError::Store { message } => {
                tracing::error!(error = %message, "Store operation failed");
                json!({ "error": STORE_ERROR_MESSAGE })
            }
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Unhandled error");
                json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            return AppError::store(format!(
                "{} (constraint: {})",
                db.message(),
                db.constraint().unwrap_or("-")
            ));
        }

        AppError::store(e.to_string())
    }
}
