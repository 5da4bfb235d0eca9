//! Request extractors for authentication and authorization.
//!
//! - [`auth`]: the [`AuthUser`](auth::AuthUser) extractor — validates the
//!   bearer token and resolves the live directory record behind it
//! - [`role`]: the pure [`require_role`](role::require_role) guard and the
//!   [`RequireAdmin`](role::RequireAdmin) extractor for admin-only routes
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <access_token>`
//! 2. `AuthUser` decodes the token, re-reads the user from the directory,
//!    and rejects disabled accounts
//! 3. `RequireAdmin` additionally checks the live role
//! 4. The handler runs with the resolved record

pub mod auth;
pub mod role;
