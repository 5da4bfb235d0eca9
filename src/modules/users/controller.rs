use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateUserDto, User};
use super::service::UserService;

/// Current identity behind the presented access token.
///
/// Always the live directory record, never the token's snapshot.
#[instrument(skip_all)]
pub async fn get_me(AuthUser(user): AuthUser) -> Json<User> {
    Json(User::from(user))
}

/// Create a new user (admin-only).
#[instrument(skip_all)]
pub async fn create_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::create_user(&state.users, dto, &state.security_config)?;
    Ok(Json(user))
}

/// List all usernames in stable order (admin-only).
#[instrument(skip_all)]
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<Vec<String>> {
    Json(UserService::list_usernames(&state.users))
}
