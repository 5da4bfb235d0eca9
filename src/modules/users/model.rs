//! User DTOs and the public user view.

use serde::{Deserialize, Serialize};
use validator::Validate;

use keygate_core::Role;
use keygate_store::UserRecord;

/// Public view of a directory entry: everything except the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub disabled: bool,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            username: record.username,
            name: record.name,
            email: record.email,
            role: record.role,
            disabled: record.disabled,
        }
    }
}

/// DTO for creating a new user (admin-only).
///
/// The plaintext password never reaches the store; the service hashes it
/// first.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// Defaults to `user` when omitted.
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub disabled: bool,
}
