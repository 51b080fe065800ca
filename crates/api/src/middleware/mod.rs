//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `ADMIN` role.
//! - [`rbac::RequireClient`] -- Requires `CLIENT` or `ADMIN` role.
//! - [`rbac::RequireFreelancer`] -- Requires `FREELANCER` or `ADMIN` role.

pub mod auth;
pub mod rbac;
