//! Route definitions for the public `/sellers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sellers;
use crate::state::AppState;

/// Routes mounted at `/sellers`.
///
/// ```text
/// GET /{username} -> get_by_username
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{username}", get(sellers::get_by_username))
}
