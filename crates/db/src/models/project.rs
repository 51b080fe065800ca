//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

use crate::models::status::ProjectStatus;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub client_id: DbId,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub deadline: Timestamp,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. `skills` holds skill ids to link.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub deadline: Timestamp,
    #[serde(default)]
    pub skills: Vec<DbId>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub deadline: Option<Timestamp>,
    pub status: Option<ProjectStatus>,
}

/// Optional filters for the project list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
    /// Case-insensitive substring match on linked skill names.
    pub skill: Option<String>,
}

/// A project joined with its client's display name, for list responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithClient {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub client_name: String,
}
