//! # Keygate
//!
//! A single-process bearer-token authority built with Rust and Axum: JWT
//! access/refresh tokens signed with one symmetric key, bcrypt-hashed
//! secrets, and role-gated access control over an in-memory user directory.
//!
//! ## Overview
//!
//! Keygate exposes two core capabilities to its callers:
//!
//! - **Authenticate**: username + password in, access/refresh token pair out
//! - **Authorize**: bearer token in, live identity (or a rejection) out
//!
//! Everything flows through explicit `Result` values; a failed auth attempt
//! never crashes the process or corrupts the directory.
//!
//! ## Architecture
//!
//! The workspace splits the core into small crates with the application on
//! top:
//!
//! ```text
//! crates/
//! ├── keygate-core      # AuthError taxonomy, Role, bcrypt hashing
//! ├── keygate-config    # env-sourced configuration (JWT, cost, CORS, seed)
//! ├── keygate-auth      # Claims + TokenKind, HS256 encode/decode
//! └── keygate-store     # lock-guarded in-memory user directory
//! src/
//! ├── middleware/       # AuthUser / RequireAdmin extractors
//! ├── modules/
//! │   ├── auth/        # login, refresh, identity resolution
//! │   └── users/       # admin user management, /users/me
//! └── utils/            # AppError: core failures -> HTTP status codes
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs`
//! (HTTP handlers), `service.rs` (business logic), `model.rs` (DTOs),
//! `router.rs` (route wiring).
//!
//! ## Tokens
//!
//! - **Access token**: short-lived (default 30 minutes), authenticates a
//!   request via `Authorization: Bearer <token>`
//! - **Refresh token**: long-lived (default 7 days), exchangeable at
//!   `/refresh` for a new pair; rotated on every exchange
//!
//! Both carry `{sub, role, kind, iat, exp, jti}` signed with HS256. The
//! `kind` claim is enforced on decode, so the two are never interchangeable.
//! Authorization re-reads the directory on every request: disabling a user
//! revokes access immediately, even for unexpired tokens.
//!
//! ## Environment variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=1800
//! JWT_REFRESH_EXPIRY=604800
//! PASSWORD_HASH_COST=12
//! ALLOWED_ORIGINS=http://localhost:3000
//! BOOTSTRAP_ADMIN_USERNAME=root
//! BOOTSTRAP_ADMIN_PASSWORD=change-me
//! PORT=3000
//! ```
//!
//! The directory lives in process memory; nothing is persisted. Rotating
//! `JWT_SECRET` invalidates every outstanding token.

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use keygate_auth;
pub use keygate_config;
pub use keygate_core;
pub use keygate_store;
