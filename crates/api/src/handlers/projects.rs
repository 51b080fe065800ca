//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use workhive_core::error::CoreError;
use workhive_core::types::DbId;
use workhive_db::models::bid::BidWithFreelancer;
use workhive_db::models::contract::Contract;
use workhive_db::models::project::{
    CreateProject, Project, ProjectFilter, ProjectWithClient, UpdateProject,
};
use workhive_db::models::skill::Skill;
use workhive_db::repositories::{BidRepo, ContractRepo, ProjectRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireClient;
use crate::state::AppState;

/// A project with everything its detail page needs: client, skills,
/// bids, and the contract once one exists.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub client_name: String,
    pub skills: Vec<Skill>,
    pub bids: Vec<BidWithFreelancer>,
    pub contract: Option<Contract>,
}

/// GET /api/v1/projects
///
/// Public listing with optional `status`, `search`, and `skill` filters.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> AppResult<Json<Vec<ProjectWithClient>>> {
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let client = UserRepo::find_by_id(&state.pool, project.client_id)
        .await?
        .ok_or_else(|| AppError::InternalError("Project client row missing".into()))?;
    let skills = ProjectRepo::skills_for(&state.pool, id).await?;
    let bids = BidRepo::list_by_project(&state.pool, id).await?;
    let contract = ContractRepo::find_by_project(&state.pool, id).await?;

    Ok(Json(ProjectDetail {
        project,
        client_name: client.name,
        skills,
        bids,
        contract,
    }))
}

/// POST /api/v1/projects (client only)
pub async fn create(
    State(state): State<AppState>,
    RequireClient(user): RequireClient,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/{id} (owning client only)
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    if project.client_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner can update it".into(),
        )));
    }

    let updated = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/projects/{id} (owning client only)
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    if project.client_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner can delete it".into(),
        )));
    }

    ProjectRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
