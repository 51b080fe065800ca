//! Handler for the public `/sellers/{username}` lookup.
//!
//! Public seller pages resolve by username and expose the freelancer
//! profile only; client profiles stay private.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use workhive_db::models::profile::FreelancerProfile;
use workhive_db::models::user::UserResponse;
use workhive_db::repositories::{FreelancerProfileRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SellerResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub freelancer_profile: Option<FreelancerProfile>,
}

/// GET /api/v1/sellers/{username}
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<DataResponse<SellerResponse>>> {
    // Username lookups have no numeric id to report; RowNotFound gives
    // the same 404 shape as the id-based endpoints.
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;

    let freelancer_profile = FreelancerProfileRepo::find_by_user(&state.pool, user.id).await?;

    Ok(Json(DataResponse {
        data: SellerResponse {
            user: user.into(),
            freelancer_profile,
        },
    }))
}
