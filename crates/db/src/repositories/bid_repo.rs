//! Repository for the `bids` table, including the accept-bid transaction.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::bid::{Bid, BidWithFreelancer, BidWithProject, CreateBid};
use crate::models::contract::Contract;
use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, freelancer_id, amount, duration, cover_letter, status, \
     created_at, updated_at";

/// Same columns qualified with the `b.` alias, for joined queries.
const B_COLUMNS: &str = "b.id, b.project_id, b.freelancer_id, b.amount, b.duration, \
     b.cover_letter, b.status, b.created_at, b.updated_at";

const CONTRACT_COLUMNS: &str = "id, project_id, bid_id, client_id, freelancer_id, amount, terms, \
     start_date, end_date, status, created_at, updated_at";

/// Provides bid CRUD and the accept/reject state transitions.
pub struct BidRepo;

impl BidRepo {
    /// Insert a new bid with status PENDING.
    pub async fn create(
        pool: &PgPool,
        freelancer_id: DbId,
        input: &CreateBid,
    ) -> Result<Bid, sqlx::Error> {
        let query = format!(
            "INSERT INTO bids (project_id, freelancer_id, amount, duration, cover_letter)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(input.project_id)
            .bind(freelancer_id)
            .bind(input.amount)
            .bind(input.duration)
            .bind(&input.cover_letter)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bid>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bids WHERE id = $1");
        sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up the unique (project, freelancer) bid, if any.
    pub async fn find_by_project_and_freelancer(
        pool: &PgPool,
        project_id: DbId,
        freelancer_id: DbId,
    ) -> Result<Option<Bid>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM bids WHERE project_id = $1 AND freelancer_id = $2");
        sqlx::query_as::<_, Bid>(&query)
            .bind(project_id)
            .bind(freelancer_id)
            .fetch_optional(pool)
            .await
    }

    /// Bids on a project with the bidding freelancer's name and headline,
    /// newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<BidWithFreelancer>, sqlx::Error> {
        let query = format!(
            "SELECT {B_COLUMNS}, u.name AS freelancer_name, fp.title AS freelancer_title
             FROM bids b
             JOIN users u ON u.id = b.freelancer_id
             LEFT JOIN freelancer_profiles fp ON fp.user_id = b.freelancer_id
             WHERE b.project_id = $1
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, BidWithFreelancer>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// A freelancer's bids with project title/status and client name,
    /// newest first.
    pub async fn list_by_freelancer(
        pool: &PgPool,
        freelancer_id: DbId,
    ) -> Result<Vec<BidWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {B_COLUMNS}, p.title AS project_title, p.status AS project_status,
                    u.name AS client_name
             FROM bids b
             JOIN projects p ON p.id = b.project_id
             JOIN users u ON u.id = p.client_id
             WHERE b.freelancer_id = $1
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, BidWithProject>(&query)
            .bind(freelancer_id)
            .fetch_all(pool)
            .await
    }

    /// Reject a pending bid. Returns `None` if the bid is missing or no
    /// longer PENDING (terminal states are immutable).
    pub async fn reject(pool: &PgPool, id: DbId) -> Result<Option<Bid>, sqlx::Error> {
        let query = format!(
            "UPDATE bids SET status = 'REJECTED', updated_at = NOW()
             WHERE id = $1 AND status = 'PENDING'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Accept a pending bid: flip the bid to ACCEPTED, create the
    /// contract, and move the project to IN_PROGRESS -- all three writes
    /// in one transaction, so a concurrent reader never observes a
    /// contract without an IN_PROGRESS project or vice versa.
    ///
    /// Each statement re-checks the state it depends on (`status =
    /// 'PENDING'`, `status = 'OPEN'`), so a concurrent accept of another
    /// bid on the same project loses cleanly: its project update matches
    /// zero rows and the whole transaction rolls back. The unique
    /// `uq_contracts_project` constraint backs this up at the storage
    /// level.
    ///
    /// Returns `None` (nothing persisted) when any guard fails.
    pub async fn accept(
        pool: &PgPool,
        bid: &Bid,
        project: &Project,
    ) -> Result<Option<(Bid, Contract)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE bids SET status = 'ACCEPTED', updated_at = NOW()
             WHERE id = $1 AND status = 'PENDING'
             RETURNING {COLUMNS}"
        );
        let Some(accepted) = sqlx::query_as::<_, Bid>(&query)
            .bind(bid.id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let moved = sqlx::query(
            "UPDATE projects SET status = 'IN_PROGRESS', updated_at = NOW()
             WHERE id = $1 AND status = 'OPEN'",
        )
        .bind(bid.project_id)
        .execute(&mut *tx)
        .await?;
        if moved.rows_affected() == 0 {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO contracts (project_id, bid_id, client_id, freelancer_id, amount, terms)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CONTRACT_COLUMNS}"
        );
        let contract = sqlx::query_as::<_, Contract>(&query)
            .bind(bid.project_id)
            .bind(bid.id)
            .bind(project.client_id)
            .bind(bid.freelancer_id)
            .bind(bid.amount)
            .bind(format!("Contract for project: {}", project.title))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some((accepted, contract)))
    }

    /// Delete a bid (withdrawal). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bids WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
