//! HTTP-level integration tests for the bid lifecycle.
//!
//! Covers submission preconditions, the accept/reject transitions and
//! their side effects on project and contract, and withdrawal rules.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, patch_json_auth, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_bid_on_open_project(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Build an API").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bids",
        &freelancer.access_token,
        serde_json::json!({
            "project_id": project_id,
            "amount": 100.0,
            "duration": 10,
            "cover_letter": "I can deliver this in ten days.",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["freelancer_id"], freelancer.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_bid_requires_freelancer_role(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let project_id = common::create_project(&pool, &client, "Build an API").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bids",
        &client.access_token,
        serde_json::json!({
            "project_id": project_id,
            "amount": 100.0,
            "duration": 10,
            "cover_letter": "Bidding on my own project.",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_bid_on_missing_project_returns_404(pool: PgPool) {
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bids",
        &freelancer.access_token,
        serde_json::json!({
            "project_id": 999_999,
            "amount": 100.0,
            "duration": 10,
            "cover_letter": "Bidding into the void.",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_bid_on_non_open_project_returns_invalid_state(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Cancelled work").await;

    // Owner cancels the project.
    let app = common::build_test_app(pool.clone());
    let response = common::put_json_auth(
        app,
        &format!("/api/v1/projects/{project_id}"),
        &client.access_token,
        serde_json::json!({"status": "CANCELLED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/bids",
        &freelancer.access_token,
        serde_json::json!({
            "project_id": project_id,
            "amount": 100.0,
            "duration": 10,
            "cover_letter": "Too late to bid here.",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn second_bid_by_same_freelancer_returns_409(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Popular project").await;

    common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/bids",
        &freelancer.access_token,
        serde_json::json!({
            "project_id": project_id,
            "amount": 90.0,
            "duration": 7,
            "cover_letter": "Second thoughts, lower price.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Exactly one bid row exists.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/bids/project/{project_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Accept / reject
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn accepting_a_bid_creates_contract_and_moves_project(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "End to end").await;
    let bid_id = common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{bid_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "ACCEPTED"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ACCEPTED");
    assert_eq!(json["contract"]["amount"], 100.0);
    assert_eq!(json["contract"]["client_id"], client.id);
    assert_eq!(json["contract"]["freelancer_id"], freelancer.id);
    assert_eq!(json["contract"]["status"], "ACTIVE");

    // Project moved to IN_PROGRESS and the detail view shows the contract.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "IN_PROGRESS");
    assert!(json["contract"].is_object());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn only_project_owner_can_update_bid_status(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let interloper = common::register_user(&pool, "client2", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Private decision").await;
    let bid_id = common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{bid_id}/status"),
        &interloper.access_token,
        serde_json::json!({"status": "ACCEPTED"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejecting_a_bid_leaves_project_open_and_creates_no_contract(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Still searching").await;
    let bid_id = common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{bid_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "REJECTED"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "REJECTED");
    assert!(json.get("contract").is_none());

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "OPEN");
    assert!(json["contract"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn terminal_bid_cannot_change_state_again(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "One decision only").await;
    let bid_id = common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{bid_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "ACCEPTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // A second acceptance of the same bid must not mint a second contract.
    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{bid_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "ACCEPTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");

    // Flipping an accepted bid to rejected is equally impossible.
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{bid_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "REJECTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn accepting_a_second_bid_on_the_same_project_fails(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let first = common::register_user(&pool, "dev1", "FREELANCER").await;
    let second = common::register_user(&pool, "dev2", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Only one winner").await;
    let first_bid = common::submit_bid(&pool, &first, project_id, 100.0).await;
    let second_bid = common::submit_bid(&pool, &second, project_id, 120.0).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{first_bid}/status"),
        &client.access_token,
        serde_json::json!({"status": "ACCEPTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The project left OPEN, so the second acceptance is rejected and no
    // second contract appears.
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{second_bid}/status"),
        &client.access_token,
        serde_json::json!({"status": "ACCEPTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");
}

// ---------------------------------------------------------------------------
// Withdrawal
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn author_can_withdraw_pending_bid(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Changed my mind").await;
    let bid_id = common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/bids/{bid_id}"),
        &freelancer.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/bids/project/{project_id}")).await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_author_cannot_withdraw_bid(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let rival = common::register_user(&pool, "dev2", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Keep out").await;
    let bid_id = common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/bids/{bid_id}"), &rival.access_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The bid is untouched.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/bids/project/{project_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["status"], "PENDING");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn accepted_bid_cannot_be_withdrawn(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Committed").await;
    let bid_id = common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{bid_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "ACCEPTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/bids/{bid_id}"),
        &freelancer.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn freelancer_bid_listing_carries_project_fields(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let project_id = common::create_project(&pool, &client, "Visible title").await;
    common::submit_bid(&pool, &freelancer, project_id, 100.0).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/bids/freelancer/{}", freelancer.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["project_title"], "Visible title");
    assert_eq!(json[0]["project_status"], "OPEN");
    assert_eq!(json[0]["client_name"], "client1");
}
