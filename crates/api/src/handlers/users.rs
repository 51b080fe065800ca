//! Handlers for the `/users` resource (current user, profile upsert, lookup).

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use workhive_core::error::CoreError;
use workhive_core::types::DbId;
use workhive_db::models::profile::{
    ClientProfile, FreelancerProfile, UpsertClientProfile, UpsertFreelancerProfile,
};
use workhive_db::models::user::UserResponse;
use workhive_db::repositories::{ClientProfileRepo, FreelancerProfileRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A user together with whichever profiles exist for them.
#[derive(Debug, Serialize)]
pub struct UserWithProfiles {
    #[serde(flatten)]
    pub user: UserResponse,
    pub freelancer_profile: Option<FreelancerProfile>,
    pub client_profile: Option<ClientProfile>,
}

/// Which side of the marketplace a profile update targets.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Freelancer,
    Client,
}

/// Request body for `PUT /users/profile`. One flat bag of optional
/// fields; `profile_type` selects which profile the rest apply to.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub profile_type: ProfileType,
    // Freelancer fields.
    pub title: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub portfolio: Option<String>,
    // Client fields.
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    // Shared.
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Either profile kind, for the upsert response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Freelancer(FreelancerProfile),
    Client(ClientProfile),
}

/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserWithProfiles>>> {
    let user = load_user_with_profiles(&state, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/profile
///
/// Create or update the caller's freelancer or client profile.
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let profile = match input.profile_type {
        ProfileType::Freelancer => {
            let upsert = UpsertFreelancerProfile {
                title: input.title,
                description: input.description,
                experience: input.experience,
                education: input.education,
                location: input.location,
                languages: input.languages,
                portfolio: input.portfolio,
            };
            let profile =
                FreelancerProfileRepo::upsert(&state.pool, auth_user.user_id, &upsert).await?;
            ProfileResponse::Freelancer(profile)
        }
        ProfileType::Client => {
            let upsert = UpsertClientProfile {
                company_name: input.company_name,
                website: input.website,
                description: input.description,
                industry: input.industry,
                location: input.location,
            };
            let profile =
                ClientProfileRepo::upsert(&state.pool, auth_user.user_id, &upsert).await?;
            ProfileResponse::Client(profile)
        }
    };

    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserWithProfiles>>> {
    let user = load_user_with_profiles(&state, id).await?;
    Ok(Json(DataResponse { data: user }))
}

async fn load_user_with_profiles(state: &AppState, id: DbId) -> AppResult<UserWithProfiles> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let freelancer_profile = FreelancerProfileRepo::find_by_user(&state.pool, id).await?;
    let client_profile = ClientProfileRepo::find_by_user(&state.pool, id).await?;

    Ok(UserWithProfiles {
        user: user.into(),
        freelancer_profile,
        client_profile,
    })
}
