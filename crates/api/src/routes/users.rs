//! Route definitions for the `/users` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /me       -> me
/// PUT /profile  -> update_profile
/// GET /{id}     -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::me))
        .route("/profile", put(users::update_profile))
        .route("/{id}", get(users::get_by_id))
}
