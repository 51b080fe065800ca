//! Route definitions for the `/gigs` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::gigs;
use crate::state::AppState;

/// Routes mounted at `/gigs`.
///
/// ```text
/// GET   /                     -> list (public catalogue)
/// POST  /                     -> create (freelancer)
/// GET   /orders               -> list_orders (caller's orders)
/// PATCH /orders/{id}/status   -> update_order_status (gig's freelancer)
/// GET   /{id}                 -> get_by_id
/// PUT   /{id}                 -> update (owner)
/// POST  /{id}/order           -> order (client)
/// GET   /{id}/orders          -> list_orders_for_gig (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gigs::list).post(gigs::create))
        .route("/orders", get(gigs::list_orders))
        .route("/orders/{id}/status", patch(gigs::update_order_status))
        .route("/{id}", get(gigs::get_by_id).put(gigs::update))
        .route("/{id}/order", post(gigs::order))
        .route("/{id}/orders", get(gigs::list_orders_for_gig))
}
