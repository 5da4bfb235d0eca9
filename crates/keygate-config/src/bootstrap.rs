use std::env;

/// Optional admin account seeded into the directory at startup.
///
/// The directory lives in process memory and starts empty; without at least
/// one admin the user-management routes are unreachable. Setting
/// `BOOTSTRAP_ADMIN_USERNAME` and `BOOTSTRAP_ADMIN_PASSWORD` seeds one.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl BootstrapConfig {
    /// Returns `None` unless both the username and password variables are set.
    pub fn from_env() -> Option<Self> {
        let username = env::var("BOOTSTRAP_ADMIN_USERNAME").ok()?;
        let password = env::var("BOOTSTRAP_ADMIN_PASSWORD").ok()?;

        Some(Self {
            name: env::var("BOOTSTRAP_ADMIN_NAME")
                .unwrap_or_else(|_| "Administrator".to_string()),
            email: env::var("BOOTSTRAP_ADMIN_EMAIL")
                .unwrap_or_else(|_| format!("{username}@localhost")),
            username,
            password,
        })
    }
}
