//! # API Errors
//!
//! Maps errors crossing the HTTP edge onto responses. Validation errors
//! become `400 Bad Request` carrying the message verbatim; every other
//! failure is a generic `500`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::customer::{StoreError, ValidationError};

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input rejected by a service
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Record store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(err) => (status, err.message().to_string()).into_response(),
            ApiError::Store(err) => {
                error!(code = err.code(), error = %err, "request failed");
                status.into_response()
            }
        }
    }
}
