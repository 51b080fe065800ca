//! Handlers for the `/contracts` resource.
//!
//! Contracts are created by the accept-bid transaction, never here; these
//! endpoints cover reads, status transitions, and reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use workhive_core::error::CoreError;
use workhive_core::types::DbId;
use workhive_db::models::contract::{Contract, ContractWithParties};
use workhive_db::models::payment::Payment;
use workhive_db::models::review::{CreateReview, Review};
use workhive_db::models::status::ContractStatus;
use workhive_db::repositories::{ContractRepo, PaymentRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PATCH /contracts/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateContractStatusRequest {
    pub status: ContractStatus,
}

/// Request body for `POST /contracts/{id}/reviews`.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: i32,
    pub comment: Option<String>,
}

/// A contract with its payments and reviews, for the detail endpoint.
#[derive(Debug, Serialize)]
pub struct ContractDetail {
    #[serde(flatten)]
    pub contract: ContractWithParties,
    pub payments: Vec<Payment>,
    pub reviews: Vec<Review>,
}

/// GET /api/v1/contracts
///
/// Contracts where the caller is either party, newest first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<ContractWithParties>>> {
    let contracts = ContractRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(contracts))
}

/// GET /api/v1/contracts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContractDetail>> {
    let contract = ContractRepo::find_by_id_with_parties(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;

    require_party(&contract.contract, auth_user.user_id)?;

    let payments = PaymentRepo::list_by_contract(&state.pool, id).await?;
    let reviews = ReviewRepo::list_by_contract(&state.pool, id).await?;

    Ok(Json(ContractDetail {
        contract,
        payments,
        reviews,
    }))
}

/// PATCH /api/v1/contracts/{id}/status
///
/// Either party may update. COMPLETED stamps the end date; COMPLETED and
/// TERMINATED propagate the same status to the project.
pub async fn update_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContractStatusRequest>,
) -> AppResult<Json<Contract>> {
    let contract = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;

    require_party(&contract, auth_user.user_id)?;

    let updated = ContractRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;

    Ok(Json(updated))
}

/// POST /api/v1/contracts/{id}/reviews
///
/// Leave a review on the contract; the counterparty is the reviewee.
/// A second review by the same reviewer is a 409.
pub async fn create_review(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<Review>)> {
    if !(1..=5).contains(&input.rating) {
        return Err(AppError::Core(CoreError::Validation(
            "Rating must be between 1 and 5".into(),
        )));
    }

    let contract = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;

    require_party(&contract, auth_user.user_id)?;

    // The reviewer reviews whoever they are not.
    let to_user_id = if auth_user.user_id == contract.client_id {
        contract.freelancer_id
    } else {
        contract.client_id
    };

    if ReviewRepo::find_by_contract_and_reviewer(&state.pool, id, auth_user.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already submitted a review for this contract".into(),
        )));
    }

    let review = ReviewRepo::create(
        &state.pool,
        &CreateReview {
            contract_id: id,
            from_user_id: auth_user.user_id,
            to_user_id,
            rating: input.rating,
            comment: input.comment,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// 403 unless the user is one of the contract's parties.
fn require_party(contract: &Contract, user_id: DbId) -> Result<(), AppError> {
    if contract.client_id != user_id && contract.freelancer_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not a party to this contract".into(),
        )));
    }
    Ok(())
}
