//! User registration.

use provenance_core::{Email, User, UserId};

use super::{Result, Store, StoreError};

impl Store {
    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if the email or the name is blank.
    /// Returns `StoreError::Conflict` if the email is already registered.
    pub fn register(&self, email: &str, name: &str) -> Result<User> {
        let email = Email::parse(email).map_err(|e| StoreError::InvalidArgument(e.to_string()))?;
        if name.trim().is_empty() {
            return Err(StoreError::InvalidArgument(
                "user name cannot be empty".to_owned(),
            ));
        }

        let mut inner = self.inner.lock();
        if inner.users.contains_key(&email) {
            return Err(StoreError::Conflict(
                "a user with the same email address already exists".to_owned(),
            ));
        }

        let user = User {
            id: UserId::new(),
            email: email.clone(),
            name: name.to_owned(),
        };
        inner.users.insert(email, user.clone());

        Ok(user)
    }

    /// Get a registered user by email.
    #[must_use]
    pub fn user(&self, email: &str) -> Option<User> {
        self.inner.lock().users.get(email).cloned()
    }
}
