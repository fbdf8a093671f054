//! In-memory certificate, transaction and user store.
//!
//! # Collections
//!
//! - `certificates` - certificate records keyed by [`CertificateId`]
//! - `transactions` - per-certificate transfer history, most recent first
//! - `users` - registered users keyed by [`Email`]
//!
//! # Consistency
//!
//! Every operation takes the single store-wide lock for its whole
//! read-check-write sequence, so cross-collection checks ("owner exists",
//! "no pending transfer") cannot interleave with another caller's mutation.
//! A failed operation leaves all collections untouched.
//!
//! `Certificate::transfer` is not stored. It is derived from the head of the
//! certificate's history every time a record leaves the store.
//!
//! Deleting a certificate leaves its history behind. Ids are never reused,
//! and a deleted id can no longer receive transactions, so the orphaned
//! history cannot grow.

mod certificates;
mod transfers;
mod users;

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use thiserror::Error;

use provenance_core::{Certificate, CertificateId, Email, Transaction, User};

/// Errors returned by store operations.
///
/// The message is safe to show to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Input is malformed or asks for a change the store does not allow.
    #[error("{0}")]
    InvalidArgument(String),

    /// Referenced certificate or user does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The operation would break a uniqueness rule.
    #[error("{0}")]
    Conflict(String),

    /// The certificate's transfer history is not in the required state.
    #[error("{0}")]
    FailedPrecondition(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Process-wide store for certificates, transfers and users.
///
/// Construct one at startup and share it behind an `Arc`; tests build a
/// fresh instance each.
#[derive(Debug, Default)]
pub struct Store {
    inner: Mutex<Collections>,
}

#[derive(Debug, Default)]
struct Collections {
    certificates: HashMap<CertificateId, CertificateRecord>,
    transactions: HashMap<CertificateId, VecDeque<Transaction>>,
    users: HashMap<Email, User>,
}

/// Stored certificate fields. `transfer` is deliberately absent.
#[derive(Debug, Clone)]
struct CertificateRecord {
    id: CertificateId,
    title: String,
    created_at: DateTime<Utc>,
    owner_id: Email,
    year: i64,
    note: Option<String>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collections {
    /// Look up a registered user's email by its string form.
    fn registered_email(&self, email: &str) -> Option<Email> {
        self.users.get(email).map(|user| user.email.clone())
    }
}

impl CertificateRecord {
    /// Assemble the caller-facing certificate, deriving `transfer` from the
    /// head of `history`.
    fn to_certificate(&self, history: Option<&VecDeque<Transaction>>) -> Certificate {
        Certificate {
            id: self.id,
            title: self.title.clone(),
            created_at: self.created_at,
            owner_id: self.owner_id.clone(),
            year: self.year,
            note: self.note.clone(),
            transfer: history.and_then(VecDeque::front).cloned(),
        }
    }
}

fn certificate_not_found(id: &CertificateId) -> StoreError {
    StoreError::NotFound(format!("certificate {id} not found"))
}
