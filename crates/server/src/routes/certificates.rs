//! Certificate route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use provenance_core::{Certificate, CertificatePatch, NewCertificate};

use super::parse_certificate_id;
use crate::error::{AppError, Result};
use crate::middleware::{ActingUser, JsonBody};
use crate::state::AppState;

/// Issue a certificate owned by the acting user.
///
/// `POST /certificates`. Any `ownerId` in the body is replaced by the
/// `X-User-Email` header. The body is decoded before the header is checked.
pub async fn create(
    State(state): State<AppState>,
    acting_user: std::result::Result<ActingUser, AppError>,
    JsonBody(mut candidate): JsonBody<NewCertificate>,
) -> Result<(StatusCode, Json<Certificate>)> {
    let ActingUser(email) = acting_user?;
    candidate.owner_id = email;

    let certificate = state.store().create_certificate(candidate)?;
    tracing::info!(
        certificate_id = %certificate.id,
        owner = %certificate.owner_id,
        "Certificate created"
    );

    Ok((StatusCode::CREATED, Json(certificate)))
}

/// `PATCH /certificates/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<CertificatePatch>,
) -> Result<Json<Certificate>> {
    let id = parse_certificate_id(&id)?;

    let certificate = state.store().update_certificate(id, patch)?;
    tracing::info!(certificate_id = %id, "Certificate updated");

    Ok(Json(certificate))
}

/// `DELETE /certificates/{id}`
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_certificate_id(&id)?;

    state.store().delete_certificate(id)?;
    tracing::info!(certificate_id = %id, "Certificate deleted");

    Ok(StatusCode::NO_CONTENT)
}
