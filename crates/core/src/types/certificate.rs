//! Artwork certificate types.
//!
//! [`Certificate`] is the stored record as callers see it. [`NewCertificate`]
//! and [`CertificatePatch`] are the candidate shapes accepted by create and
//! update; they carry the fields a client may try to set, including ones the
//! store will refuse (a preset `id`, a different `ownerId`, a changed
//! `transfer`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{CertificateId, Email, Transaction};

/// A certificate of ownership for an artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Store-generated identifier.
    pub id: CertificateId,
    /// Title of the artwork.
    pub title: String,
    /// When the certificate was issued. Never changes.
    pub created_at: DateTime<Utc>,
    /// Email of the current owner.
    pub owner_id: Email,
    /// Year the artwork was made.
    pub year: i64,
    /// Free-form provenance notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Most recent transfer, if one was ever proposed.
    pub transfer: Option<Transaction>,
}

/// Candidate for a new certificate.
///
/// `owner_id` is normally filled in by the transport from the caller's
/// identity rather than decoded from the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCertificate {
    /// Must be absent: identifiers are generated by the store.
    #[serde(default)]
    pub id: Option<String>,
    /// Title of the artwork.
    #[serde(default)]
    pub title: String,
    /// Email of the owner. Must belong to a registered user.
    #[serde(default)]
    pub owner_id: String,
    /// Year the artwork was made.
    #[serde(default)]
    pub year: i64,
    /// Free-form provenance notes.
    #[serde(default)]
    pub note: Option<String>,
}

/// Partial update of a certificate.
///
/// Only `title`, `year` and `note` are applied. `owner_id` and `transfer` are
/// accepted so that attempts to change them can be refused explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificatePatch {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New year.
    #[serde(default)]
    pub year: Option<i64>,
    /// New note.
    #[serde(default)]
    pub note: Option<String>,
    /// Owner the caller believes is current. Empty or absent skips the check.
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Transfer the caller believes is current. `None` skips the check;
    /// `Some(None)` asserts there is no transfer.
    #[serde(default, deserialize_with = "present")]
    pub transfer: Option<Option<Transaction>>,
}

/// Distinguishes an explicit `null` from a missing field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::TransactionStatus;

    #[test]
    fn test_certificate_wire_shape() {
        let cert = Certificate {
            id: CertificateId::new(),
            title: "Sunflowers".to_string(),
            created_at: Utc::now(),
            owner_id: Email::parse("a@x.com").unwrap(),
            year: 1888,
            note: None,
            transfer: None,
        };

        let value = serde_json::to_value(&cert).unwrap();
        assert_eq!(value["ownerId"], "a@x.com");
        assert_eq!(value["year"], 1888);
        assert!(value["createdAt"].is_string());
        assert!(value["transfer"].is_null());
        assert!(value.get("note").is_none());
    }

    #[test]
    fn test_new_certificate_decodes_without_owner() {
        let candidate: NewCertificate = serde_json::from_value(json!({
            "title": "my-thing",
            "year": 1998,
            "note": "some notes"
        }))
        .unwrap();

        assert_eq!(candidate.id, None);
        assert_eq!(candidate.owner_id, "");
        assert_eq!(candidate.note.as_deref(), Some("some notes"));
    }

    #[test]
    fn test_new_certificate_fields_are_optional() {
        let candidate: NewCertificate = serde_json::from_value(json!({"title": "T"})).unwrap();
        assert_eq!(candidate.title, "T");
        assert_eq!(candidate.year, 0);

        let empty: NewCertificate = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, NewCertificate::default());
    }

    #[test]
    fn test_new_certificate_keeps_preset_id() {
        let candidate: NewCertificate =
            serde_json::from_value(json!({"id": "my id", "title": "t", "year": 1}))
                .unwrap();
        assert_eq!(candidate.id.as_deref(), Some("my id"));
    }

    #[test]
    fn test_patch_transfer_missing_vs_null() {
        let missing: CertificatePatch = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert_eq!(missing.transfer, None);

        let null: CertificatePatch = serde_json::from_value(json!({"transfer": null})).unwrap();
        assert_eq!(null.transfer, Some(None));

        let unknown_status = serde_json::from_value::<CertificatePatch>(json!({
            "transfer": {"email": "b@x.com", "status": "in-progress"}
        }));
        assert!(unknown_status.is_err());

        let set: CertificatePatch = serde_json::from_value(json!({
            "transfer": {"email": "b@x.com", "status": "pending"}
        }))
        .unwrap();
        let transfer = set.transfer.flatten().unwrap();
        assert_eq!(transfer.status, TransactionStatus::Pending);
    }
}
