//! Contract entity model.
//!
//! Contracts are never created directly: the only insert path is
//! [`crate::repositories::BidRepo::accept`], which runs inside the
//! accept-bid transaction.

use serde::Serialize;
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

use crate::models::status::ContractStatus;

/// A contract row from the `contracts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contract {
    pub id: DbId,
    pub project_id: DbId,
    pub bid_id: DbId,
    pub client_id: DbId,
    pub freelancer_id: DbId,
    pub amount: f64,
    pub terms: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub status: ContractStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A contract joined with the project title and both parties' names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContractWithParties {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub contract: Contract,
    pub project_title: String,
    pub client_name: String,
    pub freelancer_name: String,
}
