use tracing::instrument;

use keygate_config::SecurityConfig;
use keygate_core::{AuthError, hash_password};
use keygate_store::{UserRecord, UserStore};

use super::model::{CreateUserDto, User};

pub struct UserService;

impl UserService {
    /// Hashes the password and inserts the new record; fails with
    /// [`AuthError::AlreadyExists`] when the username is taken.
    ///
    /// Hashing runs before the store lock is touched, so the directory is
    /// never blocked on bcrypt.
    #[instrument(skip_all, fields(username = %dto.username, role = %dto.role))]
    pub fn create_user(
        store: &UserStore,
        dto: CreateUserDto,
        security_config: &SecurityConfig,
    ) -> Result<User, AuthError> {
        let password_hash = hash_password(&dto.password, security_config.bcrypt_cost)?;

        let record = UserRecord {
            username: dto.username,
            name: dto.name,
            email: dto.email,
            role: dto.role,
            disabled: dto.disabled,
            password_hash,
        };
        store.insert(record.clone())?;

        Ok(User::from(record))
    }

    /// All usernames in stable order.
    pub fn list_usernames(store: &UserStore) -> Vec<String> {
        store.list_usernames()
    }
}
