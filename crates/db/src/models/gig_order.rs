//! Gig order entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

use crate::models::status::GigOrderStatus;

/// A row from the `gig_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GigOrder {
    pub id: DbId,
    pub gig_id: DbId,
    pub client_id: DbId,
    pub requirements: String,
    pub delivery_time: i32,
    pub revisions: i32,
    pub status: GigOrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for placing an order against a gig.
#[derive(Debug)]
pub struct CreateGigOrder {
    pub gig_id: DbId,
    pub client_id: DbId,
    pub requirements: String,
    pub delivery_time: i32,
    pub revisions: i32,
}

/// An order joined with gig and party display fields, for order listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GigOrderWithGig {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub order: GigOrder,
    pub gig_title: String,
    pub gig_price: f64,
    pub freelancer_id: DbId,
    pub freelancer_name: String,
    pub client_name: String,
}
