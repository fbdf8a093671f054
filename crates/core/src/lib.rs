//! Provenance Core - Entity types for the certificate registry.
//!
//! This crate provides the value shapes shared by the store and the HTTP
//! transport:
//! - [`Certificate`] - ownership record for an artwork
//! - [`Transaction`] - one ownership-transfer attempt on a certificate
//! - [`User`] - a registered owner or dealer, keyed by [`Email`]
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no locking, no HTTP. All
//! invariant enforcement across collections lives in the server's store.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, statuses and the entity structs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
