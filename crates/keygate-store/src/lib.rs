//! # Keygate Store
//!
//! The in-memory user directory.
//!
//! - [`model`]: the [`UserRecord`] held per user
//! - [`store`]: the lock-guarded [`UserStore`]
//!
//! The store is an owned value, not a global: the application wraps one
//! instance in an `Arc` and hands it to the services that need it, so tests
//! get isolation by simply building a fresh store.
//!
//! # Example
//!
//! ```
//! use keygate_core::Role;
//! use keygate_store::{UserRecord, UserStore};
//!
//! let store = UserStore::new();
//! store
//!     .insert(UserRecord {
//!         username: "alice".to_string(),
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!         role: Role::Admin,
//!         disabled: false,
//!         password_hash: "<bcrypt hash>".to_string(),
//!     })
//!     .unwrap();
//!
//! assert!(store.find("alice").is_some());
//! assert_eq!(store.list_usernames(), vec!["alice".to_string()]);
//! ```

pub mod model;
pub mod store;

// Re-export commonly used types at crate root
pub use model::UserRecord;
pub use store::UserStore;
