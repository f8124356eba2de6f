//! Error taxonomy for the HTTP surface.
//!
//! # Design Decisions
//! - Three categories: validation (400), not found (404), store failure (500)
//! - Handlers return `Result<_, ApiError>` and propagate with `?`
//! - Store error text is included in the 500 body; this is an internal tool
//!   and the same error is also logged server-side

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors a request handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty on create.
    #[error("{0}")]
    Validation(&'static str),

    /// The targeted issue does not exist.
    #[error("Issue not found")]
    NotFound,

    /// The underlying document store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(message) => json!({ "message": message }),
            ApiError::NotFound => json!({ "message": "Issue not found" }),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                json!({ "message": "Server error", "error": e.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
