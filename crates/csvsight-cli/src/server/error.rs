//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use csvsight::CsvsightError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client (malformed, oversized, or empty input).
    BadRequest(String),
    /// Downstream or internal failure.
    Internal(String),
}

/// Error envelope: `{"success": false, "error": "..."}`.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

impl From<CsvsightError> for ApiError {
    fn from(err: CsvsightError) -> Self {
        match err {
            // Client input problems surface as 400
            CsvsightError::EmptyData(msg) | CsvsightError::InvalidUpload(msg) => {
                ApiError::BadRequest(msg)
            }
            // Everything else is a downstream/system failure
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
