//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (client)
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update (owner)
/// DELETE /{id}  -> delete (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
}
