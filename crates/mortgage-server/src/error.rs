//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use mortgage_engine::EngineError;

/// Message returned for failures that are not the caller's fault.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// When the error occurred, epoch milliseconds
    pub timestamp: i64,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                error!("Unexpected error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UNEXPECTED_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message, status))).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::RateNotFound { .. } => {
                warn!("Data not available: {}", err);
                ApiError::NotFound(err.to_string())
            }
            EngineError::CalculationError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
