//! Handlers for the `/gigs` resource: gig CRUD, the public catalogue,
//! and gig orders.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use workhive_core::error::CoreError;
use workhive_core::roles::{ROLE_CLIENT, ROLE_FREELANCER};
use workhive_core::types::{DbId, Timestamp};
use workhive_db::models::gig::{CreateGig, Gig, GigFilter, GigSort, GigWithFreelancer, UpdateGig};
use workhive_db::models::gig_order::{CreateGigOrder, GigOrder, GigOrderWithGig};
use workhive_db::models::status::{GigOrderStatus, GigStatus};
use workhive_db::repositories::{GigOrderRepo, GigRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireClient, RequireFreelancer};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /gigs`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGigRequest {
    #[validate(length(min = 5, max = 100, message = "Title must be 5-100 characters"))]
    pub title: String,
    #[validate(length(min = 20, max = 2000, message = "Description must be 20-2000 characters"))]
    pub description: String,
    #[validate(range(min = 5.0, message = "Minimum price is 5"))]
    pub price: f64,
    #[validate(range(min = 1, message = "Minimum delivery time is 1 day"))]
    pub delivery_time: i32,
    #[validate(range(min = 0, max = 10, message = "Revisions must be 0-10"))]
    pub revisions: i32,
    #[validate(length(min = 2, message = "Category must be at least 2 characters"))]
    pub category: String,
    #[validate(length(min = 2, message = "Subcategory must be at least 2 characters"))]
    pub subcategory: String,
    #[validate(
        length(min = 1, max = 10, message = "1-10 tags required"),
        custom(function = validate_tags)
    )]
    pub tags: Vec<String>,
    #[validate(
        length(min = 1, max = 5, message = "1-5 images required"),
        custom(function = validate_images)
    )]
    pub images: Vec<String>,
    #[validate(
        length(min = 1, max = 10, message = "1-10 requirements required"),
        custom(function = validate_requirements)
    )]
    pub requirements: Vec<String>,
}

/// Request body for `PUT /gigs/{id}`. All fields optional; `status`
/// allows pausing or soft-deleting the listing.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGigRequest {
    #[validate(length(min = 5, max = 100, message = "Title must be 5-100 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 20, max = 2000, message = "Description must be 20-2000 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 5.0, message = "Minimum price is 5"))]
    pub price: Option<f64>,
    #[validate(range(min = 1, message = "Minimum delivery time is 1 day"))]
    pub delivery_time: Option<i32>,
    #[validate(range(min = 0, max = 10, message = "Revisions must be 0-10"))]
    pub revisions: Option<i32>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub status: Option<GigStatus>,
}

/// Request body for `POST /gigs/{id}/order`.
#[derive(Debug, Deserialize, Validate)]
pub struct OrderGigRequest {
    #[validate(length(min = 20, max = 1000, message = "Requirements must be 20-1000 characters"))]
    pub requirements: String,
    #[validate(range(min = 1, message = "Minimum delivery time is 1 day"))]
    pub delivery_time: i32,
    #[validate(range(min = 0, max = 10, message = "Revisions must be 0-10"))]
    pub revisions: i32,
}

/// Request body for `PATCH /gigs/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: GigOrderStatus,
}

/// Query parameters for the public gig listing.
#[derive(Debug, Default, Deserialize)]
pub struct GigListParams {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub sort: Option<GigSort>,
}

/// Query parameters for order listings.
#[derive(Debug, Default, Deserialize)]
pub struct OrderListParams {
    pub status: Option<GigOrderStatus>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Pricing block of a catalogue item.
#[derive(Debug, Serialize)]
pub struct GigPricing {
    pub amount: f64,
    pub currency: &'static str,
    pub delivery_time: i32,
    pub revisions: i32,
}

/// Category block of a catalogue item, slugged for URLs.
#[derive(Debug, Serialize)]
pub struct GigCategory {
    pub main: String,
    pub sub: String,
}

/// Stats block of a catalogue item.
#[derive(Debug, Serialize)]
pub struct GigStats {
    pub rating: f64,
    pub order_count: i64,
}

/// Freelancer block of a catalogue item.
#[derive(Debug, Serialize)]
pub struct GigFreelancer {
    pub id: DbId,
    pub name: String,
    pub title: Option<String>,
    pub location: Option<String>,
}

/// One entry of the public gig catalogue.
#[derive(Debug, Serialize)]
pub struct GigListItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub pricing: GigPricing,
    pub category: GigCategory,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub requirements: Vec<String>,
    pub stats: GigStats,
    pub freelancer: GigFreelancer,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<GigWithFreelancer> for GigListItem {
    fn from(row: GigWithFreelancer) -> Self {
        let gig = row.gig;
        Self {
            id: gig.id,
            title: gig.title,
            description: gig.description,
            pricing: GigPricing {
                amount: gig.price,
                currency: "USD",
                delivery_time: gig.delivery_time,
                revisions: gig.revisions,
            },
            category: GigCategory {
                main: slugify(&gig.category),
                sub: slugify(&gig.subcategory),
            },
            tags: gig.tags,
            images: gig.images,
            requirements: gig.requirements,
            stats: GigStats {
                rating: gig.rating,
                order_count: row.order_count,
            },
            freelancer: GigFreelancer {
                id: gig.freelancer_id,
                name: row.freelancer_name,
                title: row.freelancer_title,
                location: row.freelancer_location,
            },
            created_at: gig.created_at,
            updated_at: gig.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Gig handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/gigs (freelancer only)
pub async fn create(
    State(state): State<AppState>,
    RequireFreelancer(user): RequireFreelancer,
    Json(input): Json<CreateGigRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Gig>>)> {
    input.validate()?;

    let gig = GigRepo::create(
        &state.pool,
        &CreateGig {
            freelancer_id: user.user_id,
            title: input.title,
            description: input.description,
            price: input.price,
            delivery_time: input.delivery_time,
            revisions: input.revisions,
            category: input.category,
            subcategory: input.subcategory,
            tags: input.tags,
            images: input.images,
            requirements: input.requirements,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: gig })))
}

/// GET /api/v1/gigs
///
/// Public catalogue of ACTIVE gigs with slugged category filters, price
/// range, search, and sort.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GigListParams>,
) -> AppResult<Json<DataResponse<Vec<GigListItem>>>> {
    let filter = GigFilter {
        category: params.category,
        subcategory: params.subcategory,
        min_price: params.min_price,
        max_price: params.max_price,
        search: params.search,
        sort: params.sort.unwrap_or_default(),
    };

    let gigs = GigRepo::list(&state.pool, &filter).await?;
    let items: Vec<GigListItem> = gigs.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/gigs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GigWithFreelancer>> {
    let gig = GigRepo::find_by_id_with_freelancer(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gig", id }))?;
    Ok(Json(gig))
}

/// PUT /api/v1/gigs/{id} (owning freelancer only)
pub async fn update(
    State(state): State<AppState>,
    RequireFreelancer(user): RequireFreelancer,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGigRequest>,
) -> AppResult<Json<DataResponse<Gig>>> {
    input.validate()?;

    let gig = GigRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gig", id }))?;

    if gig.freelancer_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the gig's owner can update it".into(),
        )));
    }

    let updated = GigRepo::update(
        &state.pool,
        id,
        &UpdateGig {
            title: input.title,
            description: input.description,
            price: input.price,
            delivery_time: input.delivery_time,
            revisions: input.revisions,
            category: input.category,
            subcategory: input.subcategory,
            tags: input.tags,
            images: input.images,
            requirements: input.requirements,
            status: input.status,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Gig", id }))?;

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Order handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/gigs/{id}/order (client only)
pub async fn order(
    State(state): State<AppState>,
    RequireClient(user): RequireClient,
    Path(id): Path<DbId>,
    Json(input): Json<OrderGigRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<GigOrder>>)> {
    input.validate()?;

    let gig = GigRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gig", id }))?;

    if gig.status != GigStatus::Active {
        return Err(AppError::Core(CoreError::InvalidState(
            "Gig is not available for ordering".into(),
        )));
    }

    let order = GigOrderRepo::create(
        &state.pool,
        &CreateGigOrder {
            gig_id: id,
            client_id: user.user_id,
            requirements: input.requirements,
            delivery_time: input.delivery_time,
            revisions: input.revisions,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /api/v1/gigs/orders
///
/// The caller's orders: freelancers see orders placed against their
/// gigs, clients see orders they placed.
pub async fn list_orders(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<OrderListParams>,
) -> AppResult<Json<DataResponse<Vec<GigOrderWithGig>>>> {
    let orders = if auth_user.role == ROLE_FREELANCER {
        GigOrderRepo::list_for_freelancer(&state.pool, auth_user.user_id, params.status).await?
    } else if auth_user.role == ROLE_CLIENT {
        GigOrderRepo::list_for_client(&state.pool, auth_user.user_id, params.status).await?
    } else {
        return Err(AppError::Core(CoreError::Forbidden(
            "Orders are scoped to clients and freelancers".into(),
        )));
    };

    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/gigs/{id}/orders (owning freelancer only)
pub async fn list_orders_for_gig(
    State(state): State<AppState>,
    RequireFreelancer(user): RequireFreelancer,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<GigOrderWithGig>>>> {
    let gig = GigRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gig", id }))?;

    if gig.freelancer_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the gig's owner can view its orders".into(),
        )));
    }

    let orders = GigOrderRepo::list_by_gig(&state.pool, id).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// PATCH /api/v1/gigs/orders/{id}/status (gig's freelancer only)
///
/// Accept (IN_PROGRESS) or decline (CANCELLED) a PENDING order.
pub async fn update_order_status(
    State(state): State<AppState>,
    RequireFreelancer(user): RequireFreelancer,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<DataResponse<GigOrder>>> {
    if !matches!(
        input.status,
        GigOrderStatus::InProgress | GigOrderStatus::Cancelled
    ) {
        return Err(AppError::Core(CoreError::Validation(
            "Status must be IN_PROGRESS or CANCELLED".into(),
        )));
    }

    let order = GigOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GigOrder",
            id,
        }))?;

    let gig = GigRepo::find_by_id(&state.pool, order.gig_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gig",
            id: order.gig_id,
        }))?;

    if gig.freelancer_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the gig's owner can update this order".into(),
        )));
    }

    if order.status != GigOrderStatus::Pending {
        return Err(AppError::Core(CoreError::InvalidState(
            "Order can only be updated while PENDING".into(),
        )));
    }

    let updated = GigOrderRepo::update_status_from_pending(&state.pool, id, input.status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::InvalidState("Order is no longer pending".into()))
        })?;

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lowercase a display label and replace spaces with dashes:
/// `Web Development` -> `web-development`.
fn slugify(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.iter().any(|t| t.len() < 2) {
        return Err(field_error(
            "tag_too_short",
            "Each tag must be at least 2 characters",
        ));
    }
    Ok(())
}

fn validate_images(images: &[String]) -> Result<(), ValidationError> {
    if images
        .iter()
        .any(|i| !i.starts_with("http://") && !i.starts_with("https://"))
    {
        return Err(field_error(
            "invalid_image_url",
            "Each image must be an http(s) URL",
        ));
    }
    Ok(())
}

fn validate_requirements(requirements: &[String]) -> Result<(), ValidationError> {
    if requirements.iter().any(|r| r.len() < 5) {
        return Err(field_error(
            "requirement_too_short",
            "Each requirement must be at least 5 characters",
        ));
    }
    Ok(())
}
