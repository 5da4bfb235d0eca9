use std::sync::Arc;

use tracing::{info, warn};

use keygate_config::{BootstrapConfig, CorsConfig, JwtConfig, SecurityConfig};
use keygate_core::{AuthError, Role, hash_password};
use keygate_store::{UserRecord, UserStore};

/// Shared application state.
///
/// The user directory is an owned store handed around by `Arc`, never a
/// process-wide global — tests build a fresh one per case. Config values
/// are read once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub jwt_config: JwtConfig,
    pub security_config: SecurityConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    let state = AppState {
        users: Arc::new(UserStore::new()),
        jwt_config: JwtConfig::from_env(),
        security_config: SecurityConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };

    if let Some(bootstrap) = BootstrapConfig::from_env() {
        match seed_bootstrap_admin(&state, &bootstrap) {
            Ok(()) => info!(username = %bootstrap.username, "Bootstrap admin seeded"),
            Err(e) => warn!("Failed to seed bootstrap admin: {e}"),
        }
    } else {
        warn!("No bootstrap admin configured; the directory starts empty");
    }

    state
}

fn seed_bootstrap_admin(state: &AppState, bootstrap: &BootstrapConfig) -> Result<(), AuthError> {
    let password_hash = hash_password(&bootstrap.password, state.security_config.bcrypt_cost)?;
    state.users.insert(UserRecord {
        username: bootstrap.username.clone(),
        name: bootstrap.name.clone(),
        email: bootstrap.email.clone(),
        role: Role::Admin,
        disabled: false,
        password_hash,
    })
}
