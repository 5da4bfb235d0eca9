//! The lock-guarded user directory.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use keygate_core::AuthError;

use crate::model::UserRecord;

/// In-memory user directory behind a store-wide reader/writer lock.
///
/// A single map-wide lock is sufficient at this scale. Reads clone the
/// record out so the lock is released before any password hashing or token
/// work happens; nothing expensive ever runs under the lock. Entries are
/// keyed by username and never deleted.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<BTreeMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a user by exact username.
    pub fn find(&self, username: &str) -> Option<UserRecord> {
        self.users.read().get(username).cloned()
    }

    /// Inserts a new record. Usernames are unique; inserting a taken one
    /// fails and leaves the store untouched.
    pub fn insert(&self, record: UserRecord) -> Result<(), AuthError> {
        let mut users = self.users.write();
        if users.contains_key(&record.username) {
            return Err(AuthError::AlreadyExists);
        }
        users.insert(record.username.clone(), record);
        Ok(())
    }

    /// Sets the disabled flag on an existing record — the one update
    /// operation the directory supports.
    pub fn set_disabled(&self, username: &str, disabled: bool) -> Result<(), AuthError> {
        match self.users.write().get_mut(username) {
            Some(record) => {
                record.disabled = disabled;
                Ok(())
            }
            None => Err(AuthError::UserNotFound),
        }
    }

    /// All usernames in stable lexicographic order.
    pub fn list_usernames(&self) -> Vec<String> {
        self.users.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}
