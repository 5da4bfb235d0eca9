//! JWT claim structures.

use serde::{Deserialize, Serialize};

use keygate_core::Role;

/// What a token may be used for.
///
/// Serialized as `"access"` / `"refresh"` inside the signed payload and
/// checked by the codec on every decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Signed payload carried inside every Keygate token.
///
/// Immutable once issued; a token dies implicitly when `exp` passes. There
/// is no revocation list — disabling the account is the kill switch, since
/// authorization always re-reads the live directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username (subject claim).
    pub sub: String,
    /// Role snapshot at issuance. Informational for clients; authorization
    /// decisions use the directory's current record, not this field.
    pub role: Role,
    /// Which endpoints accept this token.
    pub kind: TokenKind,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiry (Unix timestamp), strictly greater than `iat`.
    pub exp: i64,
    /// Unique token id; makes every issued token distinct even within one
    /// clock second.
    pub jti: String,
}
