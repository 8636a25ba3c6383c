#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the SafeT server.
//!
//! The safety result itself lives in `safet_safety_models`; this crate only
//! holds the HTTP-specific wrappers around it and around the auth flow.

use safet_auth_models::PublicUser;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/safety`.
///
/// Coordinates are kept as raw strings so that unparsable values reach the
/// handler and are reported with the same message as missing ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SafetyQueryParams {
    /// Latitude.
    pub lat: Option<String>,
    /// Longitude.
    pub lng: Option<String>,
    /// Optional free-text address to echo back.
    pub address: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// Response from `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    /// The new user.
    pub user: PublicUser,
    /// Session token, also set as a cookie.
    pub token: String,
}

/// Response from `POST /api/auth/login` and `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// The signed-in user.
    pub user: PublicUser,
}

/// Response from `POST /api/auth/logout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// Always `true`.
    pub success: bool,
}
