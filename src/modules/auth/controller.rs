use axum::{
    Json,
    extract::{Form, State},
};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, RefreshRequest, TokenPair};
use super::service::AuthService;

/// Authenticate with username/password and receive a bearer token pair.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let pair = AuthService::login(
        &state.users,
        &form.username,
        &form.password,
        &state.jwt_config,
        &state.security_config,
    )?;
    Ok(Json(pair))
}

/// Exchange a refresh token for a new, rotated token pair.
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RefreshRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let pair = AuthService::refresh(&state.users, &body.refresh_token, &state.jwt_config)?;
    Ok(Json(pair))
}
