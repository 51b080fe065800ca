//! Status enums mirroring the PostgreSQL enum types in the migrations.
//!
//! All serialize in SCREAMING_SNAKE_CASE on both the wire and in the
//! database, so the JSON a client sees matches the stored value exactly.

use serde::{Deserialize, Serialize};

/// `projects.status` -- OPEN is the sole state that accepts bids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
    Terminated,
}

/// `bids.status` -- PENDING is the sole initial state; ACCEPTED and
/// REJECTED are terminal (no transition out, no deletion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "bid_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BidStatus {
    /// Whether the bid can no longer change state.
    pub fn is_terminal(self) -> bool {
        matches!(self, BidStatus::Accepted | BidStatus::Rejected)
    }
}

/// `contracts.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contract_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    Active,
    Completed,
    Terminated,
}

/// `payments.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// `gigs.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gig_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GigStatus {
    Active,
    Paused,
    Deleted,
}

/// `gig_orders.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gig_order_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GigOrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}
