//! User directory.
//!
//! [`UserStore`] is the seam between the auth flow and wherever users live.
//! The only implementation is [`InMemoryUserStore`], which lasts for the
//! lifetime of the process.

use std::collections::BTreeMap;
use std::sync::RwLock;

use safet_auth_models::User;

use crate::AuthError;

/// Storage for registered users, keyed by email.
pub trait UserStore: Send + Sync {
    /// Inserts `user` under `email`.
    ///
    /// # Errors
    ///
    /// * [`AuthError::EmailTaken`] if a user is already registered under
    ///   `email`
    /// * [`AuthError::Store`] if the backing store fails
    fn create(&self, email: &str, user: User) -> Result<(), AuthError>;

    /// Looks up the user registered under `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the backing store fails.
    fn find(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// A [`UserStore`] backed by a map behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<String, User>>,
}

impl InMemoryUserStore {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, AuthError> {
        Ok(self
            .users
            .read()
            .map_err(|_| AuthError::Store("user directory lock poisoned".to_string()))?
            .len())
    }

    /// Whether no users are registered.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, AuthError> {
        Ok(self.len()? == 0)
    }
}

impl UserStore for InMemoryUserStore {
    fn create(&self, email: &str, user: User) -> Result<(), AuthError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AuthError::Store("user directory lock poisoned".to_string()))?;

        if users.contains_key(email) {
            return Err(AuthError::EmailTaken);
        }

        users.insert(email.to_string(), user);
        drop(users);
        Ok(())
    }

    fn find(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::Store("user directory lock poisoned".to_string()))?;
        Ok(users.get(email).cloned())
    }
}
