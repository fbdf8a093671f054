//! Registered users.

use serde::{Deserialize, Serialize};

use crate::{Email, UserId};

/// An artwork owner or dealer.
///
/// Immutable after registration. Other records refer to users by `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-generated identifier.
    pub id: UserId,
    /// Business key; unique across users.
    pub email: Email,
    /// Display name.
    pub name: String,
}
