#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Signup, login, and session handling for SafeT.
//!
//! [`AuthService`] ties a [`UserStore`] to a [`SessionStore`]. Users and
//! sessions live in memory and are lost on restart.
//!
//! Credential failures are deliberately indistinguishable: an unknown email
//! and a wrong password both yield [`AuthError::InvalidCredentials`].

pub mod password;
pub mod session;
pub mod store;

use std::sync::Arc;

use safet_auth_models::{LoginRequest, PublicUser, SignupRequest, User};
use thiserror::Error;

pub use session::SessionStore;
pub use store::{InMemoryUserStore, UserStore};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors from authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup was missing a name, email, or password.
    #[error("Name, email, and password are required")]
    MissingSignupFields,

    /// Login was missing an email or password.
    #[error("Email and password are required")]
    MissingLoginFields,

    /// Password is shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    /// A user with this email already exists.
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No valid session was presented.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The backing store failed.
    #[error("Store error: {0}")]
    Store(String),
}

/// A signed-in user and their session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// The user the session belongs to.
    pub user: PublicUser,
    /// Opaque session token.
    pub token: String,
}

/// Signup, login, and session lookups over a shared user directory.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: SessionStore,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}

impl AuthService {
    /// Creates a service over `users` with an empty session store.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            sessions: SessionStore::new(),
        }
    }

    /// Registers a new user and opens a session for them.
    ///
    /// # Errors
    ///
    /// * [`AuthError::MissingSignupFields`] if any field is absent or empty
    /// * [`AuthError::PasswordTooShort`] if the password has fewer than
    ///   [`MIN_PASSWORD_LENGTH`] characters
    /// * [`AuthError::EmailTaken`] if the email is already registered
    /// * [`AuthError::Store`] if a store fails
    pub fn signup(&self, request: SignupRequest) -> Result<AuthSession, AuthError> {
        let (Some(name), Some(email), Some(password)) = (
            non_empty(request.name),
            non_empty(request.email),
            non_empty(request.password),
        ) else {
            return Err(AuthError::MissingSignupFields);
        };

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }

        let salt = password::generate_salt();
        let user = User {
            name,
            email: email.clone(),
            password_hash: password::hash_password(&password, &salt),
            salt,
        };
        let public = user.to_public();

        self.users.create(&email, user)?;
        log::info!("signup: registered {email}");

        let token = self.sessions.issue(&email)?;
        Ok(AuthSession {
            user: public,
            token,
        })
    }

    /// Checks credentials and opens a session.
    ///
    /// # Errors
    ///
    /// * [`AuthError::MissingLoginFields`] if email or password is absent
    ///   or empty
    /// * [`AuthError::InvalidCredentials`] if the email is unknown or the
    ///   password does not match
    /// * [`AuthError::Store`] if a store fails
    pub fn login(&self, request: LoginRequest) -> Result<AuthSession, AuthError> {
        let (Some(email), Some(password)) =
            (non_empty(request.email), non_empty(request.password))
        else {
            return Err(AuthError::MissingLoginFields);
        };

        let Some(user) = self.users.find(&email)? else {
            log::debug!("login: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !password::verify_password(&password, &user.salt, &user.password_hash) {
            log::debug!("login: password mismatch for {email}");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sessions.issue(&email)?;
        log::info!("login: {email} signed in");
        Ok(AuthSession {
            user: user.to_public(),
            token,
        })
    }

    /// Returns the user owning `token`.
    ///
    /// # Errors
    ///
    /// * [`AuthError::NotAuthenticated`] if the token is unknown or its user
    ///   no longer exists
    /// * [`AuthError::Store`] if a store fails
    pub fn current_user(&self, token: &str) -> Result<PublicUser, AuthError> {
        let email = self
            .sessions
            .resolve(token)?
            .ok_or(AuthError::NotAuthenticated)?;
        let user = self
            .users
            .find(&email)?
            .ok_or(AuthError::NotAuthenticated)?;
        Ok(user.to_public())
    }

    /// Ends the session for `token`. Returns whether a session was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the session store fails.
    pub fn logout(&self, token: &str) -> Result<bool, AuthError> {
        self.sessions.revoke(token)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
