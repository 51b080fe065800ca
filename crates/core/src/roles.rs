//! Well-known role names.
//!
//! These must match the `user_role` enum values in the migrations. JWT
//! claims carry the role as a string, so the RBAC extractors compare
//! against these constants.

pub const ROLE_CLIENT: &str = "CLIENT";
pub const ROLE_FREELANCER: &str = "FREELANCER";
pub const ROLE_ADMIN: &str = "ADMIN";
