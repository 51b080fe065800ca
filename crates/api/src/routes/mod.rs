pub mod auth;
pub mod bids;
pub mod contracts;
pub mod gigs;
pub mod health;
pub mod payments;
pub mod projects;
pub mod sellers;
pub mod skills;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /users/me                            current user with profiles
/// /users/profile                       upsert freelancer/client profile (PUT)
/// /users/{id}                          get user by id
///
/// /sellers/{username}                  public seller page (user + freelancer profile)
///
/// /skills                              list, create (create: admin)
/// /skills/search                       search by name/category
/// /skills/{id}                         get, update, delete (mutations: admin)
///
/// /projects                            list (?status, ?search, ?skill), create (client)
/// /projects/{id}                       get, update, delete (mutations: owner)
///
/// /bids/project/{project_id}           bids on a project
/// /bids/freelancer/{freelancer_id}     a freelancer's bids
/// /bids                                submit bid (freelancer)
/// /bids/{id}/status                    accept/reject (project's client, PATCH)
/// /bids/{id}                           withdraw (bid's freelancer, DELETE)
///
/// /contracts                           caller's contracts
/// /contracts/{id}                      contract detail (parties only)
/// /contracts/{id}/status               update status (PATCH, parties only)
/// /contracts/{id}/reviews              leave review (POST, parties only)
///
/// /payments/contract/{contract_id}     payments on a contract (parties only)
/// /payments                            record payment (contract's client)
/// /payments/{id}/status                update status (PATCH, contract's client)
///
/// /gigs                                catalogue (?category, ?min_price, ...), create (freelancer)
/// /gigs/orders                         caller's orders (?status)
/// /gigs/orders/{id}/status             accept/decline order (PATCH, gig's freelancer)
/// /gigs/{id}                           get, update (update: owner)
/// /gigs/{id}/order                     place order (POST, client)
/// /gigs/{id}/orders                    orders on a gig (owner)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/sellers", sellers::router())
        .nest("/skills", skills::router())
        .nest("/projects", projects::router())
        .nest("/bids", bids::router())
        .nest("/contracts", contracts::router())
        .nest("/payments", payments::router())
        .nest("/gigs", gigs::router())
}
