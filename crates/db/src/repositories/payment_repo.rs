//! Repository for the `payments` table.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::payment::{CreatePayment, Payment};
use crate::models::status::PaymentStatus;

const COLUMNS: &str = "id, contract_id, amount, description, status, created_at, updated_at";

pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment with status PENDING.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (contract_id, amount, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.contract_id)
            .bind(input.amount)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Payments against a contract, newest first.
    pub async fn list_by_contract(
        pool: &PgPool,
        contract_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments WHERE contract_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(contract_id)
            .fetch_all(pool)
            .await
    }

    /// Set a payment's status. Returns `None` when absent.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: PaymentStatus,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "UPDATE payments SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
