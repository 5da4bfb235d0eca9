//! # Keygate Core
//!
//! Foundational types shared by every Keygate crate:
//!
//! - [`errors`]: the [`AuthError`] failure taxonomy
//! - [`role`]: the [`Role`] assigned to every directory entry
//! - [`password`]: bcrypt hashing and verification for stored secrets
//!
//! # Example
//!
//! ```
//! use keygate_core::{hash_password, verify_password};
//!
//! let hash = hash_password("secure_password", 4).unwrap();
//! assert!(verify_password("secure_password", &hash));
//! assert!(!verify_password("wrong_password", &hash));
//! ```

pub mod errors;
pub mod password;
pub mod role;

// Re-export commonly used types at crate root
pub use errors::AuthError;
pub use password::{hash_password, verify_password};
pub use role::Role;
