//! Contract review model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

/// A review row from the `reviews` table. Each contract party may review
/// the other at most once (`uq_reviews_contract_parties`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub contract_id: DbId,
    pub from_user_id: DbId,
    pub to_user_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a review. Both user ids are derived from the
/// contract by the handler, never taken from the request body.
#[derive(Debug)]
pub struct CreateReview {
    pub contract_id: DbId,
    pub from_user_id: DbId,
    pub to_user_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
}
