//! Route definitions for the `/bids` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::bids;
use crate::state::AppState;

/// Routes mounted at `/bids`.
///
/// ```text
/// GET    /project/{project_id}        -> list_by_project
/// GET    /freelancer/{freelancer_id}  -> list_by_freelancer
/// POST   /                            -> create (freelancer)
/// PATCH  /{id}/status                 -> update_status (project's client)
/// DELETE /{id}                        -> withdraw (bid's freelancer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project/{project_id}", get(bids::list_by_project))
        .route("/freelancer/{freelancer_id}", get(bids::list_by_freelancer))
        .route("/", post(bids::create))
        .route("/{id}/status", patch(bids::update_status))
        .route("/{id}", delete(bids::withdraw))
}
