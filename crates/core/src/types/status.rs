//! Transfer lifecycle status.

use serde::{Deserialize, Serialize};

/// Status of a certificate ownership transfer.
///
/// A transaction is created `Pending` and becomes `Accepted` when the
/// recipient takes ownership. `Rejected` is part of the wire vocabulary but
/// no operation produces it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Proposed by the owner, waiting for the recipient.
    #[default]
    Pending,
    /// Finalized; ownership moved to the recipient.
    Accepted,
    /// Declined by the recipient.
    Rejected,
}

impl TransactionStatus {
    /// Returns `true` while the transfer still awaits the recipient.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("invalid transaction status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Accepted).unwrap(),
            "\"accepted\""
        );
        let parsed: TransactionStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, TransactionStatus::Pending);
    }

    #[test]
    fn test_display_matches_from_str() {
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Accepted,
            TransactionStatus::Rejected,
        ] {
            assert_eq!(status.to_string().parse::<TransactionStatus>(), Ok(status));
        }
        assert!("in-progress".parse::<TransactionStatus>().is_err());
    }

    #[test]
    fn test_only_pending_is_pending() {
        assert!(TransactionStatus::Pending.is_pending());
        assert!(!TransactionStatus::Accepted.is_pending());
        assert!(!TransactionStatus::Rejected.is_pending());
    }
}
