//! Repository for the `contracts` table.
//!
//! Contract rows are only ever inserted by `BidRepo::accept`; this
//! repository covers reads and the status transitions.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::contract::{Contract, ContractWithParties};
use crate::models::status::ContractStatus;

const COLUMNS: &str = "id, project_id, bid_id, client_id, freelancer_id, amount, terms, \
     start_date, end_date, status, created_at, updated_at";

const C_COLUMNS: &str = "c.id, c.project_id, c.bid_id, c.client_id, c.freelancer_id, c.amount, \
     c.terms, c.start_date, c.end_date, c.status, c.created_at, c.updated_at";

pub struct ContractRepo;

impl ContractRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE project_id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id_with_parties(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContractWithParties>, sqlx::Error> {
        let query = format!(
            "SELECT {C_COLUMNS}, p.title AS project_title,
                    cu.name AS client_name, fu.name AS freelancer_name
             FROM contracts c
             JOIN projects p ON p.id = c.project_id
             JOIN users cu ON cu.id = c.client_id
             JOIN users fu ON fu.id = c.freelancer_id
             WHERE c.id = $1"
        );
        sqlx::query_as::<_, ContractWithParties>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Contracts where the user is either party, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ContractWithParties>, sqlx::Error> {
        let query = format!(
            "SELECT {C_COLUMNS}, p.title AS project_title,
                    cu.name AS client_name, fu.name AS freelancer_name
             FROM contracts c
             JOIN projects p ON p.id = c.project_id
             JOIN users cu ON cu.id = c.client_id
             JOIN users fu ON fu.id = c.freelancer_id
             WHERE c.client_id = $1 OR c.freelancer_id = $1
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, ContractWithParties>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Move a contract to the given status. COMPLETED stamps `end_date`;
    /// COMPLETED and TERMINATED propagate the same status to the project
    /// in the same transaction.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ContractStatus,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE contracts SET status = $2,
                end_date = CASE WHEN $2 = 'COMPLETED'::contract_status THEN NOW() ELSE end_date END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(contract) = sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        match status {
            ContractStatus::Completed => {
                sqlx::query(
                    "UPDATE projects SET status = 'COMPLETED', updated_at = NOW() WHERE id = $1",
                )
                .bind(contract.project_id)
                .execute(&mut *tx)
                .await?;
            }
            ContractStatus::Terminated => {
                sqlx::query(
                    "UPDATE projects SET status = 'TERMINATED', updated_at = NOW() WHERE id = $1",
                )
                .bind(contract.project_id)
                .execute(&mut *tx)
                .await?;
            }
            ContractStatus::Active => {}
        }

        tx.commit().await?;
        Ok(Some(contract))
    }
}
