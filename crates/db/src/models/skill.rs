//! Skill taxonomy model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub created_at: Timestamp,
}

/// DTO for creating or renaming a skill (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub category: String,
}

/// A freelancer linked to a skill, for the skill detail endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillFreelancer {
    pub user_id: DbId,
    pub name: String,
    pub username: String,
    pub title: Option<String>,
    pub location: Option<String>,
}

/// A project linked to a skill, for the skill detail endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillProject {
    pub project_id: DbId,
    pub title: String,
    pub budget: f64,
    pub status: super::status::ProjectStatus,
    pub client_name: String,
}
