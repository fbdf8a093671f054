//! JSON request body extractor.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Like `axum::Json`, but any undecodable body is rejected with a
/// 400 `{"error": "invalid json payload"}` in the service's error shape.
///
/// The `Content-Type` header is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| invalid_payload())?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            invalid_payload()
        })
    }
}

fn invalid_payload() -> AppError {
    AppError::BadRequest("invalid json payload".to_owned())
}
