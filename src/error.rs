// src/error.rs

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Errors raised by the blob store backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("blob already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid blob key: {0}")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Error kinds of the quiz/result pipeline.
/// Every variant is surfaced to the caller; nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("quiz not found: {0}")]
    QuizNotFound(String),

    #[error("invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("ledger corrupt: {0}")]
    LedgerCorrupt(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StorageError> for ServiceError {
    /// Fallback mapping. Components that give `NotFound` a meaning of their
    /// own (missing quiz, empty ledger) match on it before converting.
    fn from(err: StorageError) -> Self {
        ServiceError::StorageUnavailable(err.to_string())
    }
}

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    AuthError(String),

    // 404 Not Found
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthError(msg) => {
                // Challenge so browsers prompt for the admin login.
                let body = Json(json!({ "error": msg }));
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Basic realm=\"admin\"")],
                    body,
                )
                    .into_response();
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::QuizNotFound(name) => {
                tracing::debug!("Quiz lookup failed: {}", name);
                AppError::NotFound("Quiz not found".to_string())
            }
            ServiceError::InvalidSubmission(msg) => {
                AppError::BadRequest(format!("Invalid form submission: {}", msg))
            }
            ServiceError::LedgerCorrupt(_) | ServiceError::StorageUnavailable(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
