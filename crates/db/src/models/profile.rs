//! Freelancer and client profile models and DTOs.
//!
//! A user may hold one profile of each kind; the upsert DTOs mirror the
//! `PUT /users/profile` request body.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

/// A row from the `freelancer_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FreelancerProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub languages: Vec<String>,
    pub portfolio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `client_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert DTO for a freelancer profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertFreelancerProfile {
    pub title: Option<String>,
    pub description: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub portfolio: Option<String>,
}

/// Upsert DTO for a client profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertClientProfile {
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
}
