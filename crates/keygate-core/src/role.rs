//! System roles.

use serde::{Deserialize, Serialize};

/// Role assigned to a directory entry.
///
/// Two-level hierarchy: admins satisfy every role requirement, plain users
/// only their own. Serialized as `"user"` / `"admin"` in claims and API
/// responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Admin => f.write_str("admin"),
        }
    }
}
