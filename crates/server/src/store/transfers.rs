//! Two-phase ownership transfer: propose, then accept.
//!
//! ```text
//! no transfer ──create──▶ pending ──accept──▶ accepted
//!                            ▲                   │
//!                            └──────create───────┘
//! ```
//!
//! Each `create` pushes a new head onto the certificate's history. Accepting
//! flips the head in place and is the only way `owner_id` ever changes.

use std::collections::VecDeque;

use provenance_core::{Certificate, CertificateId, Transaction, TransactionStatus};

use super::{Result, Store, StoreError, certificate_not_found};

impl Store {
    /// Propose transferring a certificate to another registered user.
    ///
    /// The new transaction is always `Pending`, whatever status the caller
    /// asked for.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the certificate does not exist.
    /// Returns `StoreError::InvalidArgument` if `to` is not a registered user.
    /// Returns `StoreError::Conflict` if a transfer is already pending.
    pub fn create_transaction(&self, id: CertificateId, to: &str) -> Result<Transaction> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        if !inner.certificates.contains_key(&id) {
            return Err(certificate_not_found(&id));
        }

        let to = inner.registered_email(to).ok_or_else(|| {
            StoreError::InvalidArgument(format!(
                "transfer recipient {to:?} does not match any registered user"
            ))
        })?;

        let history = inner.transactions.entry(id).or_default();
        if history.front().is_some_and(|tx| tx.status.is_pending()) {
            return Err(StoreError::Conflict(format!(
                "a pending transaction already exists for certificate {id}"
            )));
        }

        let tx = Transaction::pending(to);
        history.push_front(tx.clone());

        Ok(tx)
    }

    /// Accept the pending transfer on a certificate.
    ///
    /// Marks the head transaction `Accepted` and hands the certificate to its
    /// recipient.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the certificate does not exist.
    /// Returns `StoreError::FailedPrecondition` if the certificate has no
    /// transactions, or if the most recent one is not pending.
    pub fn accept_transaction(&self, id: CertificateId) -> Result<Certificate> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let record = inner
            .certificates
            .get_mut(&id)
            .ok_or_else(|| certificate_not_found(&id))?;

        let head = inner
            .transactions
            .get_mut(&id)
            .and_then(VecDeque::front_mut)
            .ok_or_else(|| StoreError::FailedPrecondition("no transactions found".to_owned()))?;

        if !head.status.is_pending() {
            return Err(StoreError::FailedPrecondition(
                "no pending transactions found".to_owned(),
            ));
        }

        head.status = TransactionStatus::Accepted;
        record.owner_id = head.to.clone();

        Ok(record.to_certificate(inner.transactions.get(&id)))
    }

    /// Transfer history of a certificate, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the certificate does not exist.
    pub fn transactions(&self, id: CertificateId) -> Result<Vec<Transaction>> {
        let inner = self.inner.lock();
        if !inner.certificates.contains_key(&id) {
            return Err(certificate_not_found(&id));
        }

        Ok(inner
            .transactions
            .get(&id)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default())
    }
}
