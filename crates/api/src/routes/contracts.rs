//! Route definitions for the `/contracts` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::contracts;
use crate::state::AppState;

/// Routes mounted at `/contracts`.
///
/// ```text
/// GET   /               -> list (caller's contracts)
/// GET   /{id}           -> get_by_id (parties only)
/// PATCH /{id}/status    -> update_status (parties only)
/// POST  /{id}/reviews   -> create_review (parties only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contracts::list))
        .route("/{id}", get(contracts::get_by_id))
        .route("/{id}/status", patch(contracts::update_status))
        .route("/{id}/reviews", post(contracts::create_review))
}
