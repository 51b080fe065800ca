//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workhive_core::roles::{ROLE_ADMIN, ROLE_CLIENT, ROLE_FREELANCER};
use workhive_core::types::{DbId, Timestamp};

/// `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Client,
    Freelancer,
    Admin,
}

impl UserRole {
    /// The role name as it appears in JWT claims and RBAC checks.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Client => ROLE_CLIENT,
            UserRole::Freelancer => ROLE_FREELANCER,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// DTO for inserting a new user. The password is already hashed by the
/// caller; this layer never sees plaintext.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}
