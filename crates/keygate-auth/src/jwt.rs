//! Token creation and verification.
//!
//! HS256 over a canonical serialization of [`Claims`] with the process-wide
//! signing key. Encode and decode are pure and stateless; they are safely
//! callable from any number of tasks without locks.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use keygate_config::JwtConfig;
use keygate_core::{AuthError, Role};

use crate::claims::{Claims, TokenKind};

/// Creates a short-lived access token for `username`.
pub fn create_access_token(
    username: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AuthError> {
    sign(
        username,
        role,
        TokenKind::Access,
        jwt_config.access_token_expiry,
        jwt_config,
    )
}

/// Creates a long-lived refresh token for `username`.
///
/// Refresh tokens are only accepted by the refresh exchange; the `jti`
/// claim makes every rotation produce a distinct token.
pub fn create_refresh_token(
    username: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AuthError> {
    sign(
        username,
        role,
        TokenKind::Refresh,
        jwt_config.refresh_token_expiry,
        jwt_config,
    )
}

fn sign(
    username: &str,
    role: Role,
    kind: TokenKind,
    ttl_secs: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: username.to_string(),
        role,
        kind,
        iat: now,
        exp: now + ttl_secs,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
}

/// Decodes and verifies a token, requiring it to be of `expected_kind`.
///
/// Bad signature, malformed payload, expired `exp`, and kind mismatch all
/// collapse into [`AuthError::InvalidToken`] — callers (and attackers)
/// cannot tell which check failed. Expiry is an exact comparison against
/// the current wall clock, no leeway.
pub fn decode_token(
    token: &str,
    expected_kind: TokenKind,
    jwt_config: &JwtConfig,
) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AuthError::InvalidToken)?;

    if data.claims.kind != expected_kind {
        return Err(AuthError::InvalidToken);
    }

    Ok(data.claims)
}
