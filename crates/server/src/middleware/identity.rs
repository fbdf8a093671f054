//! Caller identity extractor.
//!
//! The acting user is named by the `X-User-Email` header. There is no
//! authentication behind it; the value is taken as given.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// The HTTP header carrying the acting user's email.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Extractor that requires the `X-User-Email` header.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(ActingUser(email): ActingUser) -> String {
///     format!("acting as {email}")
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser(pub String);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_EMAIL_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(|email| Self(email.to_owned()))
            .ok_or_else(|| {
                AppError::Unprocessable("user must be set in the X-User-Email header".to_owned())
            })
    }
}
