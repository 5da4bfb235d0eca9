use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body for `POST /login` (`application/x-www-form-urlencoded`).
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// JSON body for `POST /refresh`.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "refresh_token must not be empty"))]
    pub refresh_token: String,
}

/// Access/refresh pair returned by login and refresh.
///
/// Transient: handed to the caller and forgotten — nothing is stored
/// server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenPair {
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}
