//! Route definitions for the `/payments` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET   /contract/{contract_id}  -> list_by_contract (parties only)
/// POST  /                        -> create (contract's client)
/// PATCH /{id}/status             -> update_status (contract's client)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contract/{contract_id}", get(payments::list_by_contract))
        .route("/", post(payments::create))
        .route("/{id}/status", patch(payments::update_status))
}
