//! Repository for the `gigs` table.

use sqlx::PgPool;
use workhive_core::types::DbId;

use crate::models::gig::{CreateGig, Gig, GigFilter, GigSort, GigWithFreelancer, UpdateGig};

const COLUMNS: &str = "id, freelancer_id, title, description, price, delivery_time, revisions, \
     category, subcategory, tags, images, requirements, status, rating, created_at, updated_at";

const G_COLUMNS: &str = "g.id, g.freelancer_id, g.title, g.description, g.price, \
     g.delivery_time, g.revisions, g.category, g.subcategory, g.tags, g.images, \
     g.requirements, g.status, g.rating, g.created_at, g.updated_at";

pub struct GigRepo;

impl GigRepo {
    pub async fn create(pool: &PgPool, input: &CreateGig) -> Result<Gig, sqlx::Error> {
        let query = format!(
            "INSERT INTO gigs (freelancer_id, title, description, price, delivery_time,
                 revisions, category, subcategory, tags, images, requirements)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gig>(&query)
            .bind(input.freelancer_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.delivery_time)
            .bind(input.revisions)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.tags)
            .bind(&input.images)
            .bind(&input.requirements)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gigs WHERE id = $1");
        sqlx::query_as::<_, Gig>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id_with_freelancer(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GigWithFreelancer>, sqlx::Error> {
        let query = format!(
            "SELECT {G_COLUMNS}, u.name AS freelancer_name, fp.title AS freelancer_title,
                    fp.location AS freelancer_location,
                    (SELECT COUNT(*) FROM gig_orders o WHERE o.gig_id = g.id) AS order_count
             FROM gigs g
             JOIN users u ON u.id = g.freelancer_id
             LEFT JOIN freelancer_profiles fp ON fp.user_id = g.freelancer_id
             WHERE g.id = $1"
        );
        sqlx::query_as::<_, GigWithFreelancer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ACTIVE gigs honoring the public-catalogue filters. Category
    /// and subcategory arrive as slugs (`web-development`) and are
    /// matched against the stored title-cased values by normalizing the
    /// column on the fly.
    pub async fn list(
        pool: &PgPool,
        filter: &GigFilter,
    ) -> Result<Vec<GigWithFreelancer>, sqlx::Error> {
        let order_by = match filter.sort {
            GigSort::Price => "g.price ASC",
            GigSort::Rating => "g.rating DESC",
            GigSort::Date => "g.created_at DESC",
        };
        let query = format!(
            "SELECT {G_COLUMNS}, u.name AS freelancer_name, fp.title AS freelancer_title,
                    fp.location AS freelancer_location,
                    (SELECT COUNT(*) FROM gig_orders o WHERE o.gig_id = g.id) AS order_count
             FROM gigs g
             JOIN users u ON u.id = g.freelancer_id
             LEFT JOIN freelancer_profiles fp ON fp.user_id = g.freelancer_id
             WHERE g.status = 'ACTIVE'
               AND ($1::text IS NULL OR LOWER(REPLACE(g.category, ' ', '-')) = LOWER($1))
               AND ($2::text IS NULL OR LOWER(REPLACE(g.subcategory, ' ', '-')) = LOWER($2))
               AND ($3::float8 IS NULL OR g.price >= $3)
               AND ($4::float8 IS NULL OR g.price <= $4)
               AND ($5::text IS NULL
                    OR g.title ILIKE '%' || $5 || '%'
                    OR g.description ILIKE '%' || $5 || '%')
             ORDER BY {order_by}"
        );
        sqlx::query_as::<_, GigWithFreelancer>(&query)
            .bind(&filter.category)
            .bind(&filter.subcategory)
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// Update a gig. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGig,
    ) -> Result<Option<Gig>, sqlx::Error> {
        let query = format!(
            "UPDATE gigs SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                delivery_time = COALESCE($5, delivery_time),
                revisions = COALESCE($6, revisions),
                category = COALESCE($7, category),
                subcategory = COALESCE($8, subcategory),
                tags = COALESCE($9, tags),
                images = COALESCE($10, images),
                requirements = COALESCE($11, requirements),
                status = COALESCE($12, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gig>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.delivery_time)
            .bind(input.revisions)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.tags)
            .bind(&input.images)
            .bind(&input.requirements)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }
}
