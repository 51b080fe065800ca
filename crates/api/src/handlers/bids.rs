//! Handlers for the `/bids` resource: the bid lifecycle.
//!
//! A bid is born PENDING against an OPEN project, and either the project's
//! client moves it to a terminal state (ACCEPTED or REJECTED) or its
//! freelancer withdraws it while still PENDING. Accepting a bid also
//! creates the contract and moves the project to IN_PROGRESS; those three
//! writes are a single transaction in [`BidRepo::accept`], so no reader
//! ever observes a contract without an IN_PROGRESS project or vice versa.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use workhive_core::error::CoreError;
use workhive_core::types::DbId;
use workhive_db::models::bid::{Bid, BidWithFreelancer, BidWithProject, CreateBid};
use workhive_db::models::contract::Contract;
use workhive_db::models::status::{BidStatus, ProjectStatus};
use workhive_db::repositories::{BidRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireFreelancer;
use crate::state::AppState;

/// Request body for `PATCH /bids/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateBidStatusRequest {
    pub status: BidStatus,
}

/// Response for `PATCH /bids/{id}/status`. The contract is present only
/// when the transition was to ACCEPTED.
#[derive(Debug, Serialize)]
pub struct BidStatusResponse {
    #[serde(flatten)]
    pub bid: Bid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,
}

/// GET /api/v1/bids/project/{project_id}
///
/// Public: all bids on a project, with the bidding freelancer's name and
/// headline, newest first.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<BidWithFreelancer>>> {
    let bids = BidRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(bids))
}

/// GET /api/v1/bids/freelancer/{freelancer_id}
///
/// A freelancer's bids with the project title/status, newest first.
pub async fn list_by_freelancer(
    State(state): State<AppState>,
    Path(freelancer_id): Path<DbId>,
) -> AppResult<Json<Vec<BidWithProject>>> {
    let bids = BidRepo::list_by_freelancer(&state.pool, freelancer_id).await?;
    Ok(Json(bids))
}

/// POST /api/v1/bids (freelancer only)
///
/// Submit a bid on an OPEN project. One bid per (project, freelancer):
/// a second submission is a 409.
pub async fn create(
    State(state): State<AppState>,
    RequireFreelancer(user): RequireFreelancer,
    Json(input): Json<CreateBid>,
) -> AppResult<(StatusCode, Json<Bid>)> {
    let project = ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }))?;

    if project.status != ProjectStatus::Open {
        return Err(AppError::Core(CoreError::InvalidState(
            "Project is not open for bids".into(),
        )));
    }

    if BidRepo::find_by_project_and_freelancer(&state.pool, input.project_id, user.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already bid on this project".into(),
        )));
    }

    // The uq_bids_project_freelancer constraint closes the race between
    // the check above and this insert; a loser gets the same 409.
    let bid = BidRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(bid)))
}

/// PATCH /api/v1/bids/{id}/status (project's client only)
///
/// Move a PENDING bid to ACCEPTED or REJECTED. ACCEPTED additionally
/// creates the contract and flips the project to IN_PROGRESS, atomically.
/// Terminal bids are immutable; accepting a bid on a project that already
/// left OPEN (e.g. another bid won) is rejected.
pub async fn update_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBidStatusRequest>,
) -> AppResult<Json<BidStatusResponse>> {
    let bid = BidRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;

    let project = ProjectRepo::find_by_id(&state.pool, bid.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: bid.project_id,
        }))?;

    // Only the project owner can accept/reject bids.
    if project.client_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner can update bid status".into(),
        )));
    }

    if bid.status.is_terminal() {
        return Err(AppError::Core(CoreError::InvalidState(format!(
            "Bid is already {:?} and cannot change state",
            bid.status
        ))));
    }

    match input.status {
        BidStatus::Pending => Err(AppError::Core(CoreError::InvalidState(
            "A bid cannot transition back to PENDING".into(),
        ))),
        BidStatus::Rejected => {
            let rejected = BidRepo::reject(&state.pool, id).await?.ok_or_else(|| {
                AppError::Core(CoreError::InvalidState("Bid is no longer pending".into()))
            })?;
            Ok(Json(BidStatusResponse {
                bid: rejected,
                contract: None,
            }))
        }
        BidStatus::Accepted => {
            if project.status != ProjectStatus::Open {
                return Err(AppError::Core(CoreError::InvalidState(
                    "Project already has an accepted bid".into(),
                )));
            }

            // All three writes (bid, contract, project) commit or none do.
            // A concurrent acceptance loses inside the transaction and
            // lands here with None.
            let (accepted, contract) = BidRepo::accept(&state.pool, &bid, &project)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::InvalidState(
                        "Bid or project state changed; acceptance aborted".into(),
                    ))
                })?;

            Ok(Json(BidStatusResponse {
                bid: accepted,
                contract: Some(contract),
            }))
        }
    }
}

/// DELETE /api/v1/bids/{id} (bid's freelancer only)
///
/// Withdraw a PENDING bid. Terminal bids cannot be withdrawn -- deleting
/// an accepted bid would orphan its contract.
pub async fn withdraw(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let bid = BidRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;

    if bid.freelancer_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the bid's author can withdraw it".into(),
        )));
    }

    if bid.status != BidStatus::Pending {
        return Err(AppError::Core(CoreError::InvalidState(
            "Only pending bids can be withdrawn".into(),
        )));
    }

    BidRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
