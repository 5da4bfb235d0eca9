//! # Keygate Auth
//!
//! Claim structures and the JWT codec for Keygate tokens.
//!
//! - [`claims`]: the tagged [`Claims`] payload and [`TokenKind`] discriminant
//! - [`jwt`]: token creation and verification
//!
//! # Token kinds
//!
//! Every token carries an explicit `kind` claim:
//!
//! - **Access** (`"access"`): short-lived, authenticates ordinary requests
//! - **Refresh** (`"refresh"`): long-lived, exchangeable only for a new pair
//!
//! The codec enforces the kind at decode time, so the two are never
//! interchangeable: presenting a refresh token where an access token is
//! expected (or vice versa) fails exactly like a forged token.
//!
//! # Example
//!
//! ```
//! use keygate_auth::{create_access_token, decode_token, TokenKind};
//! use keygate_config::JwtConfig;
//! use keygate_core::Role;
//!
//! let config = JwtConfig {
//!     secret: "example-secret".to_string(),
//!     access_token_expiry: 1800,
//!     refresh_token_expiry: 604_800,
//! };
//!
//! let token = create_access_token("alice", Role::User, &config).unwrap();
//! let claims = decode_token(&token, TokenKind::Access, &config).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, TokenKind};
pub use jwt::{create_access_token, create_refresh_token, decode_token};
