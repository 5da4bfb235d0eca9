use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use keygate_core::AuthError;
use keygate_store::UserRecord;

use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that authenticates a request from its `Authorization: Bearer`
/// header and resolves the live directory record behind the access token.
///
/// The record reflects the store's current state, not the token's snapshot:
/// a user disabled or demoted after issuance is rejected or downgraded here
/// even though the token is still cryptographically valid and unexpired.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserRecord);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A missing or non-bearer header reads the same as a bad token.
        let token = bearer_token(parts).ok_or(AuthError::InvalidToken)?;
        let user = AuthService::resolve_identity(&state.users, token, &state.jwt_config)?;
        Ok(AuthUser(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
