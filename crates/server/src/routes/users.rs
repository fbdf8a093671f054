//! User registration and per-owner certificate listing.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use provenance_core::{Certificate, User};

use crate::error::{AppError, Result};
use crate::middleware::JsonBody;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Register a new user.
///
/// `POST /users`
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    if request.email.trim().is_empty() || request.name.trim().is_empty() {
        return Err(AppError::Unprocessable(
            "user email and name must be set in the request body".to_owned(),
        ));
    }

    let user = state.store().register(&request.email, &request.name)?;
    tracing::info!(user_id = %user.id, email = %user.email, "User registered");

    Ok((StatusCode::CREATED, Json(user)))
}

/// List the certificates a user currently owns, oldest first.
///
/// `GET /users/{user_id}/certificates`
pub async fn certificates(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<Certificate>> {
    let mut certificates = state.store().certificates_owned_by(&user_id);
    certificates.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    Json(certificates)
}
