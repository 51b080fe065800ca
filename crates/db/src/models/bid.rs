//! Bid entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

use crate::models::status::{BidStatus, ProjectStatus};

/// A bid row from the `bids` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bid {
    pub id: DbId,
    pub project_id: DbId,
    pub freelancer_id: DbId,
    pub amount: f64,
    pub duration: i32,
    pub cover_letter: String,
    pub status: BidStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a bid. The freelancer id comes from the
/// authenticated caller, never from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBid {
    pub project_id: DbId,
    pub amount: f64,
    /// Proposed duration in days.
    pub duration: i32,
    pub cover_letter: String,
}

/// A bid joined with the bidding freelancer's name and headline, for the
/// per-project listing a client reviews.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BidWithFreelancer {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub bid: Bid,
    pub freelancer_name: String,
    pub freelancer_title: Option<String>,
}

/// A bid joined with its project's title and status, for the
/// per-freelancer listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BidWithProject {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub bid: Bid,
    pub project_title: String,
    pub project_status: ProjectStatus,
    pub client_name: String,
}
