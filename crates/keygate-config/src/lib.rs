//! # Keygate Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: signing key and token lifetimes
//! - [`security`]: password hashing work factor
//! - [`cors`]: CORS allowed origins
//! - [`bootstrap`]: optional admin account seeded at startup
//!
//! # Example
//!
//! ```
//! use keygate_config::{JwtConfig, SecurityConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let security_config = SecurityConfig::from_env();
//! ```

pub mod bootstrap;
pub mod cors;
pub mod jwt;
pub mod security;

// Re-export commonly used types at crate root
pub use bootstrap::BootstrapConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use security::SecurityConfig;
