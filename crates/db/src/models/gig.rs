//! Gig entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workhive_core::types::{DbId, Timestamp};

use crate::models::status::GigStatus;

/// A gig row from the `gigs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gig {
    pub id: DbId,
    pub freelancer_id: DbId,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Delivery time in days.
    pub delivery_time: i32,
    pub revisions: i32,
    pub category: String,
    pub subcategory: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub requirements: Vec<String>,
    pub status: GigStatus,
    pub rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gig. Field constraints are enforced by the API
/// layer before this reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateGig {
    pub freelancer_id: DbId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub delivery_time: i32,
    pub revisions: i32,
    pub category: String,
    pub subcategory: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub requirements: Vec<String>,
}

/// DTO for updating a gig. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateGig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub delivery_time: Option<i32>,
    pub revisions: Option<i32>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub status: Option<GigStatus>,
}

/// Sort orders for the public gig listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GigSort {
    /// Cheapest first.
    Price,
    /// Best-rated first.
    Rating,
    /// Newest first.
    #[default]
    Date,
}

/// Optional filters for the public gig listing. Category filters arrive
/// as slugs (`web-development`) and are matched against the stored
/// title-cased values by the repository.
#[derive(Debug, Clone, Default)]
pub struct GigFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub sort: GigSort,
}

/// A gig joined with its freelancer's name/headline and order count, for
/// the public listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GigWithFreelancer {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub gig: Gig,
    pub freelancer_name: String,
    pub freelancer_title: Option<String>,
    pub freelancer_location: Option<String>,
    pub order_count: i64,
}
