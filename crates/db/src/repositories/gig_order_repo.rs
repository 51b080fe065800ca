//! Repository for the `gig_orders` table.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::gig_order::{CreateGigOrder, GigOrder, GigOrderWithGig};
use crate::models::status::GigOrderStatus;

const COLUMNS: &str =
    "id, gig_id, client_id, requirements, delivery_time, revisions, status, created_at, updated_at";

/// Joined select shared by the order listings.
const JOINED_SELECT: &str = "SELECT o.id, o.gig_id, o.client_id, o.requirements, \
     o.delivery_time, o.revisions, o.status, o.created_at, o.updated_at, \
     g.title AS gig_title, g.price AS gig_price, g.freelancer_id AS freelancer_id, \
     fu.name AS freelancer_name, cu.name AS client_name \
     FROM gig_orders o \
     JOIN gigs g ON g.id = o.gig_id \
     JOIN users fu ON fu.id = g.freelancer_id \
     JOIN users cu ON cu.id = o.client_id";

pub struct GigOrderRepo;

impl GigOrderRepo {
    pub async fn create(pool: &PgPool, input: &CreateGigOrder) -> Result<GigOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO gig_orders (gig_id, client_id, requirements, delivery_time, revisions)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GigOrder>(&query)
            .bind(input.gig_id)
            .bind(input.client_id)
            .bind(&input.requirements)
            .bind(input.delivery_time)
            .bind(input.revisions)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GigOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gig_orders WHERE id = $1");
        sqlx::query_as::<_, GigOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id_with_gig(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GigOrderWithGig>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE o.id = $1");
        sqlx::query_as::<_, GigOrderWithGig>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Orders placed by a client, optionally filtered by status.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
        status: Option<GigOrderStatus>,
    ) -> Result<Vec<GigOrderWithGig>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             WHERE o.client_id = $1 AND ($2::gig_order_status IS NULL OR o.status = $2)
             ORDER BY o.created_at DESC"
        );
        sqlx::query_as::<_, GigOrderWithGig>(&query)
            .bind(client_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Orders against any of a freelancer's gigs, optionally filtered by
    /// status.
    pub async fn list_for_freelancer(
        pool: &PgPool,
        freelancer_id: DbId,
        status: Option<GigOrderStatus>,
    ) -> Result<Vec<GigOrderWithGig>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             WHERE g.freelancer_id = $1 AND ($2::gig_order_status IS NULL OR o.status = $2)
             ORDER BY o.created_at DESC"
        );
        sqlx::query_as::<_, GigOrderWithGig>(&query)
            .bind(freelancer_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Orders against one gig, newest first.
    pub async fn list_by_gig(
        pool: &PgPool,
        gig_id: DbId,
    ) -> Result<Vec<GigOrderWithGig>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE o.gig_id = $1 ORDER BY o.created_at DESC");
        sqlx::query_as::<_, GigOrderWithGig>(&query)
            .bind(gig_id)
            .fetch_all(pool)
            .await
    }

    /// Move a PENDING order to the given status. Returns `None` if the
    /// order is missing or no longer PENDING.
    pub async fn update_status_from_pending(
        pool: &PgPool,
        id: DbId,
        status: GigOrderStatus,
    ) -> Result<Option<GigOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE gig_orders SET status = $2, updated_at = NOW()
             WHERE id = $1 AND status = 'PENDING'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GigOrder>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
