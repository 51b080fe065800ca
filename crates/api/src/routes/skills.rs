//! Route definitions for the `/skills` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create (admin)
/// GET    /search   -> search
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update (admin)
/// DELETE /{id}     -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list).post(skills::create))
        .route("/search", get(skills::search))
        .route(
            "/{id}",
            get(skills::get_by_id)
                .put(skills::update)
                .delete(skills::delete),
        )
}
