//! Repository for the `projects` table and its skill links.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::project::{
    CreateProject, Project, ProjectFilter, ProjectWithClient, UpdateProject,
};
use crate::models::skill::Skill;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, client_id, title, description, budget, deadline, status, created_at, updated_at";

/// Same columns qualified with the `p.` alias, for joined queries.
const P_COLUMNS: &str = "p.id, p.client_id, p.title, p.description, p.budget, p.deadline, \
     p.status, p.created_at, p.updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and link the given skills, atomically.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (client_id, title, description, budget, deadline)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(client_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.budget)
            .bind(input.deadline)
            .fetch_one(&mut *tx)
            .await?;

        for skill_id in &input.skills {
            sqlx::query("INSERT INTO project_skills (project_id, skill_id) VALUES ($1, $2)")
                .bind(project.id)
                .bind(skill_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects with the client's name, newest first, honoring the
    /// optional status/search/skill filters.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, u.name AS client_name
             FROM projects p
             JOIN users u ON u.id = p.client_id
             WHERE ($1::project_status IS NULL OR p.status = $1)
               AND ($2::text IS NULL
                    OR p.title ILIKE '%' || $2 || '%'
                    OR p.description ILIKE '%' || $2 || '%')
               AND ($3::text IS NULL OR EXISTS (
                    SELECT 1 FROM project_skills ps
                    JOIN skills s ON s.id = ps.skill_id
                    WHERE ps.project_id = p.id AND s.name ILIKE '%' || $3 || '%'))
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProjectWithClient>(&query)
            .bind(filter.status)
            .bind(&filter.search)
            .bind(&filter.skill)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                budget = COALESCE($4, budget),
                deadline = COALESCE($5, deadline),
                status = COALESCE($6, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.budget)
            .bind(input.deadline)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Bids and skill links cascade at the schema level.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Skills linked to a project.
    pub async fn skills_for(pool: &PgPool, project_id: DbId) -> Result<Vec<Skill>, sqlx::Error> {
        sqlx::query_as::<_, Skill>(
            "SELECT s.id, s.name, s.category, s.created_at
             FROM project_skills ps
             JOIN skills s ON s.id = ps.skill_id
             WHERE ps.project_id = $1
             ORDER BY s.name ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
