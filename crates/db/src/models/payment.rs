//! Payment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

use crate::models::status::PaymentStatus;

/// A payment row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub contract_id: DbId,
    pub amount: f64,
    pub description: Option<String>,
    pub status: PaymentStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a payment against a contract.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub contract_id: DbId,
    pub amount: f64,
    pub description: Option<String>,
}
