//! Ownership transfer route handlers.
//!
//! `POST` proposes a transfer; `PATCH` with `{"status": "accepted"}`
//! completes it.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use provenance_core::{Certificate, Transaction, TransactionStatus};

use super::parse_certificate_id;
use crate::error::{AppError, Result};
use crate::middleware::JsonBody;
use crate::state::AppState;

/// Transfer proposal body. A client-supplied `status` is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProposeTransferRequest {
    #[serde(default, alias = "to")]
    pub email: String,
}

/// Transfer status change body.
#[derive(Debug, Default, Deserialize)]
pub struct TransferStatusRequest {
    #[serde(default)]
    pub status: String,
}

/// `POST /certificates/{id}/transfers`
pub async fn propose(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<ProposeTransferRequest>,
) -> Result<(StatusCode, Json<Transaction>)> {
    let id = parse_certificate_id(&id)?;

    let transaction = state.store().create_transaction(id, request.email.trim())?;
    tracing::info!(
        certificate_id = %id,
        recipient = %transaction.to,
        "Transfer proposed"
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// `PATCH /certificates/{id}/transfers`
pub async fn accept(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<TransferStatusRequest>,
) -> Result<Json<Certificate>> {
    let id = parse_certificate_id(&id)?;

    if request.status.parse::<TransactionStatus>() != Ok(TransactionStatus::Accepted) {
        return Err(AppError::Unprocessable(
            "transaction status can only be set to 'accepted'".to_owned(),
        ));
    }

    let certificate = state.store().accept_transaction(id)?;
    tracing::info!(
        certificate_id = %id,
        owner = %certificate.owner_id,
        "Transfer accepted"
    );

    Ok(Json(certificate))
}
