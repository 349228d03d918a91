//! # HTTP Errors
//!
//! Error types surfaced by the appointment routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::observability::Event;
use crate::store::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Appointment API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested identifier is absent
    #[error("Appointment not found.")]
    NotFound,

    /// Store or connection failure. Not retried.
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a client. Internal failures are not described.
    pub fn detail(&self) -> String {
        match self {
            ApiError::NotFound => self.to_string(),
            ApiError::Store(_) => "Internal Server Error".to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            detail: err.detail(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound => {
                warn!(event = %Event::AppointmentNotFound, "{}", self);
            }
            ApiError::Store(e) => {
                error!(event = %Event::StoreFailure, code = e.code(), error = %e, "store failure");
            }
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
