//! Handler error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::StoreError;
use tracing::{debug, warn};

/// JSON body sent with every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Stable code for programmatic handling.
    pub code: String,
    pub message: String,
}

/// Errors a request handler can return.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The `{id}` path segment is not an integer. Reported exactly like an
    /// id that does not exist.
    #[error("todo {0} not found")]
    UnknownId(String),

    /// The request body did not decode into the expected JSON shape.
    #[error("invalid request payload: {0}")]
    MalformedBody(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Store(StoreError::NotFound(_)) | AppError::UnknownId(_) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            AppError::Store(StoreError::Conflict(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFLICT")
            }
            AppError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            warn!(error = %self, "request failed");
        } else {
            debug!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            code: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        let (status, code) = AppError::Store(StoreError::NotFound(3)).status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");

        let (status, _) = AppError::UnknownId("abc".to_string()).status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_500() {
        let err = AppError::from(StoreError::Conflict(9));
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "todo id 9 is already in use");
    }

    #[test]
    fn malformed_body_maps_to_400() {
        let response = AppError::MalformedBody("eof".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
