//! Session tokens.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::AuthError;

/// Maps opaque session tokens to the email they were issued for.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<BTreeMap<String, String>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new random token for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the lock is poisoned.
    pub fn issue(&self, email: &str) -> Result<String, AuthError> {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.sessions
            .write()
            .map_err(|_| poisoned())?
            .insert(token.clone(), email.to_string());
        Ok(token)
    }

    /// Returns the email for `token`, if the session exists.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the lock is poisoned.
    pub fn resolve(&self, token: &str) -> Result<Option<String>, AuthError> {
        Ok(self
            .sessions
            .read()
            .map_err(|_| poisoned())?
            .get(token)
            .cloned())
    }

    /// Revokes `token`. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the lock is poisoned.
    pub fn revoke(&self, token: &str) -> Result<bool, AuthError> {
        Ok(self
            .sessions
            .write()
            .map_err(|_| poisoned())?
            .remove(token)
            .is_some())
    }
}

fn poisoned() -> AuthError {
    AuthError::Store("session store lock poisoned".to_string())
}
