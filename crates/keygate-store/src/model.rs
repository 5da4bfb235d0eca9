//! Directory record model.

use keygate_core::Role;

/// A user entry as held by the credential store.
///
/// `username` is the immutable key; `password_hash` is an opaque bcrypt PHC
/// string — the plaintext never reaches the store. The record deliberately
/// does not implement `Serialize`: responses go through the public user view
/// in the application layer, which drops the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub disabled: bool,
    pub password_hash: String,
}
