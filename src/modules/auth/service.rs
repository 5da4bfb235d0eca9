use tracing::instrument;

use keygate_auth::{TokenKind, create_access_token, create_refresh_token, decode_token};
use keygate_config::{JwtConfig, SecurityConfig};
use keygate_core::{AuthError, hash_password, verify_password};
use keygate_store::{UserRecord, UserStore};

use super::model::TokenPair;

pub struct AuthService;

impl AuthService {
    /// Verifies credentials and issues a fresh access+refresh pair.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller: both report [`AuthError::InvalidCredentials`], and the
    /// unknown-username path still pays for one bcrypt computation so the
    /// two failures cost about the same. The store lock is released before
    /// any hashing runs (`find` clones the record out).
    #[instrument(skip_all, fields(username = %username))]
    pub fn login(
        store: &UserStore,
        username: &str,
        password: &str,
        jwt_config: &JwtConfig,
        security_config: &SecurityConfig,
    ) -> Result<TokenPair, AuthError> {
        let Some(user) = store.find(username) else {
            // Burn one hash so this path is not measurably faster than a
            // wrong password.
            let _ = hash_password(password, security_config.bcrypt_cost);
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }
        if user.disabled {
            return Err(AuthError::AccountDisabled);
        }

        Self::issue_pair(&user, jwt_config)
    }

    /// Exchanges a refresh token for a new pair.
    ///
    /// Refresh tokens rotate: every successful call issues a brand-new
    /// refresh token alongside the access token, narrowing the replay
    /// window of a leaked token. The directory is re-read so accounts
    /// disabled after issuance are rejected here; an access token is not
    /// accepted in place of a refresh token.
    #[instrument(skip_all)]
    pub fn refresh(
        store: &UserStore,
        refresh_token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<TokenPair, AuthError> {
        let claims = decode_token(refresh_token, TokenKind::Refresh, jwt_config)?;

        let user = store.find(&claims.sub).ok_or(AuthError::UserNotFound)?;
        if user.disabled {
            return Err(AuthError::AccountDisabled);
        }

        Self::issue_pair(&user, jwt_config)
    }

    /// Resolves the live user record behind an access token.
    ///
    /// The token only proves identity. Role and disabled state come from
    /// the store at call time, so a disable or demotion takes effect before
    /// the token expires.
    #[instrument(skip_all)]
    pub fn resolve_identity(
        store: &UserStore,
        access_token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<UserRecord, AuthError> {
        let claims = decode_token(access_token, TokenKind::Access, jwt_config)?;

        let user = store.find(&claims.sub).ok_or(AuthError::UserNotFound)?;
        if user.disabled {
            return Err(AuthError::AccountDisabled);
        }

        Ok(user)
    }

    fn issue_pair(user: &UserRecord, jwt_config: &JwtConfig) -> Result<TokenPair, AuthError> {
        let access = create_access_token(&user.username, user.role, jwt_config)?;
        let refresh = create_refresh_token(&user.username, user.role, jwt_config)?;
        Ok(TokenPair::bearer(access, refresh))
    }
}
