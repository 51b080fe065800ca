//! Handlers for the `/skills` resource.
//!
//! Reads are public; mutation is admin-only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use workhive_core::error::CoreError;
use workhive_core::types::DbId;
use workhive_db::models::skill::{CreateSkill, Skill, SkillFreelancer, SkillProject};
use workhive_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /skills/search`.
#[derive(Debug, Deserialize)]
pub struct SkillSearchParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// A skill together with the freelancers and projects linked to it.
#[derive(Debug, Serialize)]
pub struct SkillDetail {
    #[serde(flatten)]
    pub skill: Skill,
    pub freelancers: Vec<SkillFreelancer>,
    pub projects: Vec<SkillProject>,
}

/// GET /api/v1/skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Skill>>>> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/v1/skills/search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchParams>,
) -> AppResult<Json<DataResponse<Vec<Skill>>>> {
    let skills = SkillRepo::search(
        &state.pool,
        params.search.as_deref(),
        params.category.as_deref(),
    )
    .await?;
    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/v1/skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SkillDetail>>> {
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;

    let freelancers = SkillRepo::freelancers_for(&state.pool, id).await?;
    let projects = SkillRepo::projects_for(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: SkillDetail {
            skill,
            freelancers,
            projects,
        },
    }))
}

/// POST /api/v1/skills (admin only)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateSkill>,
) -> AppResult<(StatusCode, Json<DataResponse<Skill>>)> {
    if SkillRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Skill '{}' already exists",
            input.name
        ))));
    }

    let skill = SkillRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// PUT /api/v1/skills/{id} (admin only)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSkill>,
) -> AppResult<Json<DataResponse<Skill>>> {
    let existing = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;

    // Renaming onto another skill's name is a conflict.
    if input.name != existing.name {
        if let Some(other) = SkillRepo::find_by_name(&state.pool, &input.name).await? {
            if other.id != id {
                return Err(AppError::Core(CoreError::Conflict(format!(
                    "Skill '{}' already exists",
                    input.name
                ))));
            }
        }
    }

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;

    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /api/v1/skills/{id} (admin only)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))
    }
}
