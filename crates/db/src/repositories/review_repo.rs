//! Repository for the `reviews` table.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::review::{CreateReview, Review};

const COLUMNS: &str = "id, contract_id, from_user_id, to_user_id, rating, comment, created_at";

pub struct ReviewRepo;

impl ReviewRepo {
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (contract_id, from_user_id, to_user_id, rating, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.contract_id)
            .bind(input.from_user_id)
            .bind(input.to_user_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// The review a given reviewer left on a contract, if any.
    pub async fn find_by_contract_and_reviewer(
        pool: &PgPool,
        contract_id: DbId,
        from_user_id: DbId,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE contract_id = $1 AND from_user_id = $2"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(contract_id)
            .bind(from_user_id)
            .fetch_optional(pool)
            .await
    }

    /// Reviews on a contract, newest first.
    pub async fn list_by_contract(
        pool: &PgPool,
        contract_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE contract_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(contract_id)
            .fetch_all(pool)
            .await
    }
}
