//! Axum-specific error types and mappings.
//!
//! Maps `UrbanApiError` and `ValidationError` onto HTTP responses. The status
//! of every variant comes from the core error kind, never from the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use urban_core::{UrbanApiError, ValidationError};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body failed validation.
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// Request could not be read at all.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_message(self) -> String {
        match self {
            Self::NotFound(msg)
            | Self::UnprocessableEntity(msg)
            | Self::BadRequest(msg)
            | Self::Conflict(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(target: "urban.http", error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.into_message(),
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<UrbanApiError> for HttpError {
    fn from(err: UrbanApiError) -> Self {
        match err {
            UrbanApiError::NotFound(e) => HttpError::NotFound(e.to_string()),
            UrbanApiError::Validation(e) => e.into(),
            e @ UrbanApiError::AlreadyExists(_) => HttpError::Conflict(e.to_string()),
            UrbanApiError::Repository(msg) => HttpError::Internal(msg),
        }
    }
}

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        HttpError::UnprocessableEntity(err.message().to_string())
    }
}
