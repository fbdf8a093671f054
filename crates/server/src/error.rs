//! Unified error handling.
//!
//! All route handlers return `Result<T, AppError>`. Errors render as
//!
//! ```json
//! {"error": "<message>", "httpStatus": <code>}
//! ```
//!
//! Store errors map onto status codes:
//!
//! | `StoreError`         | Status |
//! |----------------------|--------|
//! | `InvalidArgument`    | 400    |
//! | `NotFound`           | 404    |
//! | `Conflict`           | 409    |
//! | `FailedPrecondition` | 422    |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation refused.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Resource not found outside the store (e.g. an unparseable id).
    #[error("{0}")]
    NotFound(String),

    /// Request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Request decoded but fails transport-level validation.
    #[error("{0}")]
    Unprocessable(String),
}

/// JSON body sent to clients for every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// HTTP status code, repeated for clients that only see the body.
    #[serde(rename = "httpStatus")]
    pub http_status: u16,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(err) => match err {
                StoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Conflict(_) => StatusCode::CONFLICT,
                StoreError::FailedPrecondition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request rejected");

        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
            http_status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
