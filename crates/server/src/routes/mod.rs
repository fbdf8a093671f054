//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Liveness check
//!
//! # Users
//! POST   /users                           - Register a user
//! GET    /users/{user_id}/certificates    - Certificates owned by a user
//!
//! # Certificates (POST requires X-User-Email)
//! POST   /certificates                    - Issue a certificate
//! PATCH  /certificates/{id}               - Update title, year or note
//! DELETE /certificates/{id}               - Delete a certificate
//!
//! # Transfers
//! POST   /certificates/{id}/transfers     - Propose a transfer
//! PATCH  /certificates/{id}/transfers     - Accept the pending transfer
//! ```

pub mod certificates;
pub mod transfers;
pub mod users;

use axum::{
    Router,
    routing::{get, patch, post},
};

use provenance_core::CertificateId;

use crate::error::AppError;
use crate::state::AppState;

/// Create the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register))
        .route("/users/{user_id}/certificates", get(users::certificates))
        .route("/certificates", post(certificates::create))
        .route(
            "/certificates/{id}",
            patch(certificates::update).delete(certificates::delete),
        )
        .route(
            "/certificates/{id}/transfers",
            post(transfers::propose).patch(transfers::accept),
        )
}

/// Parse a certificate id from the path. Anything that is not a valid id
/// cannot name a stored certificate.
fn parse_certificate_id(raw: &str) -> Result<CertificateId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("certificate {raw} not found")))
}
