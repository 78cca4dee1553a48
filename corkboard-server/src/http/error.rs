//! API error type with IntoResponse
//!
//! Errors are converted to `{"error": message}` bodies with the
//! matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing (400)
    Validation(ValidationError),

    /// Board or node not found (404)
    NotFound { resource: &'static str, id: String },

    /// Request body is not a JSON object (400)
    MalformedBody { reason: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::MalformedBody { .. } => "Invalid JSON body".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "lookup missed");
            }
            Self::MalformedBody { reason } => {
                tracing::warn!(%reason, "rejected request body");
            }
            Self::Validation(_) => {}
        }

        let body = json!({ "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(e) => Self::Validation(e),
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
        }
    }
}
