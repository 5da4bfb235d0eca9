use std::env;

/// Work factor for the password hasher.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// bcrypt cost; each +1 doubles the hashing work. Clamped to bcrypt's
    /// valid range of 4..=31.
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        Self {
            bcrypt_cost: env::var("PASSWORD_HASH_COST")
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .map(|c| c.clamp(4, 31))
                .unwrap_or(12),
        }
    }
}
