//! Password hashing and verification with bcrypt.
//!
//! Stored secrets are self-contained PHC strings carrying the algorithm tag,
//! cost, and a per-hash random salt, so hashing the same password twice
//! produces different strings and `verify_password` needs no side channel.

use bcrypt::hash;

use crate::errors::AuthError;

/// Hashes a password with bcrypt at the given cost (work factor).
///
/// A fresh random salt is generated on every call. Cost is validated by
/// bcrypt itself (4..=31); each +1 doubles the hashing work.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    hash(password, cost).map_err(|e| AuthError::Internal(format!("Failed to hash password: {e}")))
}

/// Verifies a password against a stored bcrypt hash.
///
/// The comparison inside bcrypt is constant-time. A malformed stored hash
/// counts as a mismatch rather than an error; verification never panics on
/// bad input.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
