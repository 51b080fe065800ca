//! Handlers for the `/payments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use workhive_core::error::CoreError;
use workhive_core::types::DbId;
use workhive_db::models::payment::{CreatePayment, Payment};
use workhive_db::models::status::{ContractStatus, PaymentStatus};
use workhive_db::repositories::{ContractRepo, PaymentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PATCH /payments/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub status: PaymentStatus,
}

/// GET /api/v1/payments/contract/{contract_id}
///
/// Payments against a contract; parties only.
pub async fn list_by_contract(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(contract_id): Path<DbId>,
) -> AppResult<Json<Vec<Payment>>> {
    let contract = ContractRepo::find_by_id(&state.pool, contract_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id: contract_id,
        }))?;

    if contract.client_id != auth_user.user_id && contract.freelancer_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not a party to this contract".into(),
        )));
    }

    let payments = PaymentRepo::list_by_contract(&state.pool, contract_id).await?;
    Ok(Json(payments))
}

/// POST /api/v1/payments
///
/// Record a payment against an ACTIVE contract; the contract's client only.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let contract = ContractRepo::find_by_id(&state.pool, input.contract_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id: input.contract_id,
        }))?;

    if contract.client_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the contract's client can make payments".into(),
        )));
    }

    if contract.status != ContractStatus::Active {
        return Err(AppError::Core(CoreError::InvalidState(
            "Cannot make a payment against an inactive contract".into(),
        )));
    }

    let payment = PaymentRepo::create(&state.pool, &input).await?;

    // TODO: wire a real payment provider; until then payments settle
    // immediately.
    let settled = PaymentRepo::update_status(&state.pool, payment.id, PaymentStatus::Completed)
        .await?
        .ok_or_else(|| AppError::InternalError("Payment row vanished after insert".into()))?;

    Ok((StatusCode::CREATED, Json(settled)))
}

/// PATCH /api/v1/payments/{id}/status
///
/// Mark a payment failed/refunded; the contract's client only.
pub async fn update_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePaymentStatusRequest>,
) -> AppResult<Json<Payment>> {
    let payment = PaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;

    let contract = ContractRepo::find_by_id(&state.pool, payment.contract_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id: payment.contract_id,
        }))?;

    if contract.client_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the contract's client can update payment status".into(),
        )));
    }

    let updated = PaymentRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;

    Ok(Json(updated))
}
