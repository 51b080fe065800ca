//! Repository for the `skills` table and its junction lookups.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::skill::{CreateSkill, Skill, SkillFreelancer, SkillProject};

const COLUMNS: &str = "id, name, category, created_at";

pub struct SkillRepo;

impl SkillRepo {
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE name = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all skills, name-ordered.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY name ASC");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search over name and category.
    pub async fn search(
        pool: &PgPool,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR category ILIKE '%' || $1 || '%')
               AND ($2::text IS NULL OR category ILIKE '%' || $2 || '%')
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(search)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Rename / recategorize a skill. Returns `None` when absent.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET name = $2, category = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Freelancers who list this skill, with their profile headline.
    pub async fn freelancers_for(
        pool: &PgPool,
        skill_id: DbId,
    ) -> Result<Vec<SkillFreelancer>, sqlx::Error> {
        sqlx::query_as::<_, SkillFreelancer>(
            "SELECT u.id AS user_id, u.name, u.username, fp.title, fp.location
             FROM freelancer_skills fs
             JOIN freelancer_profiles fp ON fp.id = fs.freelancer_profile_id
             JOIN users u ON u.id = fp.user_id
             WHERE fs.skill_id = $1
             ORDER BY u.name ASC",
        )
        .bind(skill_id)
        .fetch_all(pool)
        .await
    }

    /// Projects tagged with this skill, with the owning client's name.
    pub async fn projects_for(
        pool: &PgPool,
        skill_id: DbId,
    ) -> Result<Vec<SkillProject>, sqlx::Error> {
        sqlx::query_as::<_, SkillProject>(
            "SELECT p.id AS project_id, p.title, p.budget, p.status, u.name AS client_name
             FROM project_skills ps
             JOIN projects p ON p.id = ps.project_id
             JOIN users u ON u.id = p.client_id
             WHERE ps.skill_id = $1
             ORDER BY p.created_at DESC",
        )
        .bind(skill_id)
        .fetch_all(pool)
        .await
    }
}
