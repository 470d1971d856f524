//! API error type with automatic HTTP status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::{StoreError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed boundary validation (422).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body or path could not be parsed; carries the extractor's status.
    #[error("{detail}")]
    Malformed { status: StatusCode, detail: String },

    /// No row with the requested id (404).
    #[error("{detail}")]
    NotFound { detail: &'static str },

    /// Storage failure (500, logged).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Anything else that went wrong in the handler (500, logged).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Malformed { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (kind, detail) = match &self {
            Self::Validation(e) => ("validation_error", e.to_string()),
            Self::Malformed { detail, .. } => ("bad_request", detail.clone()),
            Self::NotFound { detail } => ("not_found", (*detail).to_string()),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "store error");
                ("internal_error", "an internal error occurred".to_string())
            }
            Self::Internal(message) => {
                tracing::error!(%message, "internal error");
                ("internal_error", "an internal error occurred".to_string())
            }
        };

        (status, Json(json!({ "error": kind, "detail": detail }))).into_response()
    }
}
