//! Repositories for the `freelancer_profiles` and `client_profiles` tables.
//!
//! Both expose an upsert keyed on `user_id`: the profile endpoint is
//! create-or-replace from the caller's point of view.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::profile::{
    ClientProfile, FreelancerProfile, UpsertClientProfile, UpsertFreelancerProfile,
};

const FREELANCER_COLUMNS: &str = "id, user_id, title, description, experience, education, \
     location, languages, portfolio, created_at, updated_at";

const CLIENT_COLUMNS: &str =
    "id, user_id, company_name, website, description, industry, location, created_at, updated_at";

pub struct FreelancerProfileRepo;

impl FreelancerProfileRepo {
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<FreelancerProfile>, sqlx::Error> {
        let query = format!("SELECT {FREELANCER_COLUMNS} FROM freelancer_profiles WHERE user_id = $1");
        sqlx::query_as::<_, FreelancerProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &UpsertFreelancerProfile,
    ) -> Result<FreelancerProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO freelancer_profiles
                (user_id, title, description, experience, education, location, languages, portfolio)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (user_id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                experience = EXCLUDED.experience,
                education = EXCLUDED.education,
                location = EXCLUDED.location,
                languages = EXCLUDED.languages,
                portfolio = EXCLUDED.portfolio,
                updated_at = NOW()
             RETURNING {FREELANCER_COLUMNS}"
        );
        sqlx::query_as::<_, FreelancerProfile>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.experience)
            .bind(&input.education)
            .bind(&input.location)
            .bind(&input.languages)
            .bind(&input.portfolio)
            .fetch_one(pool)
            .await
    }
}

pub struct ClientProfileRepo;

impl ClientProfileRepo {
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<ClientProfile>, sqlx::Error> {
        let query = format!("SELECT {CLIENT_COLUMNS} FROM client_profiles WHERE user_id = $1");
        sqlx::query_as::<_, ClientProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &UpsertClientProfile,
    ) -> Result<ClientProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_profiles
                (user_id, company_name, website, description, industry, location)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id) DO UPDATE SET
                company_name = EXCLUDED.company_name,
                website = EXCLUDED.website,
                description = EXCLUDED.description,
                industry = EXCLUDED.industry,
                location = EXCLUDED.location,
                updated_at = NOW()
             RETURNING {CLIENT_COLUMNS}"
        );
        sqlx::query_as::<_, ClientProfile>(&query)
            .bind(user_id)
            .bind(&input.company_name)
            .bind(&input.website)
            .bind(&input.description)
            .bind(&input.industry)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }
}
