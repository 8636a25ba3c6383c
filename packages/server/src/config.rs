//! Server configuration from environment variables.

use std::path::PathBuf;

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default directory for the built frontend.
pub const DEFAULT_STATIC_DIR: &str = "app/dist";

/// Runtime settings for [`crate::run_server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to (`BIND_ADDR`).
    pub bind_addr: String,
    /// Port to listen on (`PORT`).
    pub port: u16,
    /// Directory of static frontend files served at `/` (`STATIC_DIR`).
    pub static_dir: PathBuf,
    /// Whether session cookies carry the `Secure` flag
    /// (`SESSION_COOKIE_SECURE`).
    pub secure_cookies: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            secure_cookies: false,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment, falling back to
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT value {raw:?}");
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port,
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            secure_cookies: lookup("SESSION_COOKIE_SECURE")
                .is_some_and(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes")),
        }
    }
}
