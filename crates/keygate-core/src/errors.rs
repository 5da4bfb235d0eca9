//! Failure kinds produced by the authentication core.
//!
//! The core is transport-agnostic: services return these kinds and the HTTP
//! boundary translates them into status codes in one place. Every variant is
//! local and non-retriable without new input — retrying a login with the same
//! bad password, or a refresh with the same expired token, always fails.

use thiserror::Error;

/// Everything that can go wrong inside the auth core.
///
/// Token failures (bad signature, malformed payload, expired, wrong kind)
/// all collapse into [`AuthError::InvalidToken`] so a caller cannot tell
/// which check rejected the token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately one variant for
    /// both so responses never confirm that a username exists.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The account exists and the credentials or token were fine, but the
    /// account is disabled.
    #[error("User is disabled")]
    AccountDisabled,

    /// The presented token failed signature, shape, expiry, or kind checks.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// A token decoded fine but its subject no longer resolves to a record.
    #[error("User not found")]
    UserNotFound,

    /// Username is already taken.
    #[error("Username already exists")]
    AlreadyExists,

    /// Authenticated, but the required role is missing.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// Hashing or signing failed; never caused by caller input.
    #[error("Internal error: {0}")]
    Internal(String),
}
