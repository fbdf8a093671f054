//! Ownership transfer records.

use serde::{Deserialize, Serialize};

use crate::{Email, TransactionStatus};

/// One ownership-transfer attempt on a certificate.
///
/// On the wire the recipient travels under `email`; `to` is accepted as an
/// alias when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Recipient's email. Always a registered user.
    #[serde(rename = "email", alias = "to")]
    pub to: Email,
    /// Where the transfer is in its lifecycle.
    pub status: TransactionStatus,
}

impl Transaction {
    /// A freshly proposed transfer to `to`.
    #[must_use]
    pub const fn pending(to: Email) -> Self {
        Self {
            to,
            status: TransactionStatus::Pending,
        }
    }
}
