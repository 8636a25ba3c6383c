#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! User and credential types for SafeT authentication.
//!
//! [`User`] is the stored record and never leaves the server. [`PublicUser`]
//! is what the API returns. Request types keep every field optional so that
//! a missing field is reported as a validation error rather than a body
//! parse failure.

use serde::{Deserialize, Serialize};

/// A registered user as held by the user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Email address, also the directory key.
    pub email: String,
    /// Hex-encoded salted password digest.
    pub password_hash: String,
    /// Hex-encoded per-user salt.
    pub salt: String,
}

impl User {
    /// Returns the fields safe to expose over the API.
    #[must_use]
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The publicly visible part of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password, at least 8 characters.
    pub password: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_hides_credentials() {
        let user = User {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "ab".repeat(32),
            salt: "cd".repeat(16),
        };
        let value = serde_json::to_value(user.to_public()).unwrap();
        assert_eq!(value["name"], "Asha");
        assert_eq!(value["email"], "asha@example.com");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn requests_tolerate_missing_fields() {
        let req: SignupRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("a@b.c"));
        assert!(req.name.is_none());
        assert!(req.password.is_none());

        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_none());
    }
}
