//! Core types for Provenance.
//!
//! This module provides type-safe wrappers and the entity value shapes.

pub mod certificate;
pub mod email;
pub mod id;
pub mod status;
pub mod transaction;
pub mod user;

pub use certificate::{Certificate, CertificatePatch, NewCertificate};
pub use email::{Email, EmailError};
pub use id::*;
pub use status::TransactionStatus;
pub use transaction::Transaction;
pub use user::User;
