//! Certificate create, update, delete and listing.

use chrono::Utc;

use provenance_core::{Certificate, CertificateId, CertificatePatch, NewCertificate};

use super::{CertificateRecord, Result, Store, StoreError, certificate_not_found};

impl Store {
    /// Issue a new certificate.
    ///
    /// Generates the id and stamps `created_at` with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if the candidate already carries
    /// an id, or if `owner_id` is not a registered user's email.
    pub fn create_certificate(&self, candidate: NewCertificate) -> Result<Certificate> {
        if candidate.id.as_deref().is_some_and(|id| !id.is_empty()) {
            return Err(StoreError::InvalidArgument(
                "a certificate cannot carry an id before it is created".to_owned(),
            ));
        }

        let mut inner = self.inner.lock();
        let owner_id = inner.registered_email(&candidate.owner_id).ok_or_else(|| {
            StoreError::InvalidArgument(format!(
                "owner {:?} does not match any registered user",
                candidate.owner_id
            ))
        })?;

        let mut id = CertificateId::new();
        while inner.certificates.contains_key(&id) {
            id = CertificateId::new();
        }

        let record = CertificateRecord {
            id,
            title: candidate.title,
            created_at: Utc::now(),
            owner_id,
            year: candidate.year,
            note: candidate.note,
        };
        let certificate = record.to_certificate(None);
        inner.certificates.insert(id, record);

        Ok(certificate)
    }

    /// Get a certificate by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the certificate does not exist.
    pub fn certificate(&self, id: CertificateId) -> Result<Certificate> {
        let inner = self.inner.lock();
        let record = inner
            .certificates
            .get(&id)
            .ok_or_else(|| certificate_not_found(&id))?;

        Ok(record.to_certificate(inner.transactions.get(&id)))
    }

    /// Apply a partial update to a certificate.
    ///
    /// Only `title`, `year` and `note` change. Ownership and transfer state
    /// move exclusively through the transfer workflow.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the certificate does not exist.
    /// Returns `StoreError::InvalidArgument` if the patch names a different
    /// owner or a different transfer than the stored ones.
    pub fn update_certificate(
        &self,
        id: CertificateId,
        patch: CertificatePatch,
    ) -> Result<Certificate> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let record = inner
            .certificates
            .get_mut(&id)
            .ok_or_else(|| certificate_not_found(&id))?;
        let history = inner.transactions.get(&id);

        if let Some(owner) = patch.owner_id.as_deref().filter(|o| !o.is_empty())
            && record.owner_id != owner
        {
            return Err(StoreError::InvalidArgument(
                "ownership can only be changed with a transfer".to_owned(),
            ));
        }

        if let Some(transfer) = &patch.transfer
            && transfer.as_ref() != history.and_then(|h| h.front())
        {
            return Err(StoreError::InvalidArgument(
                "transfers can only be changed through the transfer endpoints".to_owned(),
            ));
        }

        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(year) = patch.year {
            record.year = year;
        }
        if let Some(note) = patch.note {
            record.note = Some(note);
        }

        Ok(record.to_certificate(history))
    }

    /// Delete a certificate.
    ///
    /// The certificate's transfer history is left in place.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the certificate does not exist.
    pub fn delete_certificate(&self, id: CertificateId) -> Result<()> {
        self.inner
            .lock()
            .certificates
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| certificate_not_found(&id))
    }

    /// List the certificates currently owned by `owner_id`.
    ///
    /// Order is unspecified. An unknown owner yields an empty list.
    #[must_use]
    pub fn certificates_owned_by(&self, owner_id: &str) -> Vec<Certificate> {
        let inner = self.inner.lock();
        inner
            .certificates
            .values()
            .filter(|record| record.owner_id == owner_id)
            .map(|record| record.to_certificate(inner.transactions.get(&record.id)))
            .collect()
    }
}
