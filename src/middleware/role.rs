//! Role-requirement checks layered on top of identity resolution.

use axum::{extract::FromRequestParts, http::request::Parts};

use keygate_core::{AuthError, Role};
use keygate_store::UserRecord;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Checks that `user` satisfies `required`.
///
/// Pure, no I/O; composes after identity resolution. Admins satisfy every
/// requirement, plain users only `Role::User`.
pub fn require_role(user: &UserRecord, required: Role) -> Result<(), AuthError> {
    if user.role == Role::Admin || user.role == required {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions)
    }
}

/// Extractor for admin-only routes.
///
/// The role comes from the live directory record resolved by [`AuthUser`],
/// not from the token claims — a demoted admin loses these routes before
/// their token expires.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        require_role(&auth_user.0, Role::Admin)?;
        Ok(RequireAdmin(auth_user))
    }
}
