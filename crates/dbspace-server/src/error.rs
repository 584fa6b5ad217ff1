use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use dbspace_core::error::AppError;

/// API error type that maps to HTTP responses.
///
/// Bodies are plain text: the endpoint contract fixes the exact 500
/// message for configuration failures, and the consumers of this internal
/// API read the body as a diagnostic string.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, message).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match &err {
            AppError::ConnectionStringMissing => {
                ApiError::Internal("Connection string not configured".to_string())
            }
            // The underlying message is included on purpose: this is an
            // internal diagnostics endpoint and the operators reading the
            // body are the same people who fix the database. Revisit if the
            // API is ever exposed more widely.
            AppError::DataSource(e) => ApiError::Internal(format!("Database error: {}", e)),
            _ => ApiError::Internal(format!("Internal server error: {}", err)),
        }
    }
}
