//! Salted password digests.
//!
//! Passwords are never stored as given. Each user gets a random 16-byte
//! salt, and the stored value is `hex(sha256(salt || password))`.

use sha2::{Digest as _, Sha256};

/// Generates a fresh hex-encoded salt.
#[must_use]
pub fn generate_salt() -> String {
    hex::encode(uuid::Uuid::new_v4().as_bytes())
}

/// Hashes `password` with the hex-encoded `salt`.
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks `password` against a stored digest in constant time.
#[must_use]
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    let actual = hash_password(password, salt);
    constant_time_eq(actual.as_bytes(), expected_hash.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
