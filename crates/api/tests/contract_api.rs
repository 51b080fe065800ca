//! HTTP-level integration tests for contracts, payments, and reviews.
//!
//! Every test starts from the only way a contract can exist: a client
//! accepting a freelancer's bid.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, patch_json_auth, post_json_auth, TestUser};
use sqlx::PgPool;

/// Full setup: client + freelancer + accepted bid. Returns the contract id.
async fn establish_contract(pool: &PgPool, client: &TestUser, freelancer: &TestUser) -> i64 {
    let project_id = common::create_project(pool, client, "Contracted work").await;
    let bid_id = common::submit_bid(pool, freelancer, project_id, 500.0).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/bids/{bid_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "ACCEPTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["contract"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn both_parties_see_the_contract(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let contract_id = establish_contract(&pool, &client, &freelancer).await;

    for user in [&client, &freelancer] {
        let app = common::build_test_app(pool.clone());
        let response = get_auth(app, "/api/v1/contracts", &user.access_token).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"].as_i64().unwrap(), contract_id);
        assert_eq!(json[0]["project_title"], "Contracted work");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn outsiders_cannot_read_a_contract(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let outsider = common::register_user(&pool, "nosy", "CLIENT").await;
    let contract_id = establish_contract(&pool, &client, &freelancer).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}"),
        &outsider.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completing_a_contract_propagates_to_the_project(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let contract_id = establish_contract(&pool, &client, &freelancer).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "COMPLETED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "COMPLETED");
    assert!(json["end_date"].is_string(), "completion stamps end_date");

    let project_id = json["project_id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "COMPLETED");
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn client_pays_against_active_contract(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let contract_id = establish_contract(&pool, &client, &freelancer).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/payments",
        &client.access_token,
        serde_json::json!({
            "contract_id": contract_id,
            "amount": 250.0,
            "description": "First milestone",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    // Payments settle immediately (no gateway integration).
    assert_eq!(json["status"], "COMPLETED");

    // Both parties can list payments.
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/payments/contract/{contract_id}"),
        &freelancer.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn freelancer_cannot_create_payments(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let contract_id = establish_contract(&pool, &client, &freelancer).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/payments",
        &freelancer.access_token,
        serde_json::json!({
            "contract_id": contract_id,
            "amount": 250.0,
            "description": "Paying myself",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn payment_against_completed_contract_is_invalid(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let contract_id = establish_contract(&pool, &client, &freelancer).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/status"),
        &client.access_token,
        serde_json::json!({"status": "COMPLETED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/payments",
        &client.access_token,
        serde_json::json!({
            "contract_id": contract_id,
            "amount": 100.0,
            "description": "Too late",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn both_parties_review_each_other_once(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let contract_id = establish_contract(&pool, &client, &freelancer).await;

    // Client reviews the freelancer.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/reviews"),
        &client.access_token,
        serde_json::json!({"rating": 5, "comment": "Delivered early."}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["from_user_id"], client.id);
    assert_eq!(json["to_user_id"], freelancer.id);

    // Freelancer reviews the client.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/reviews"),
        &freelancer.access_token,
        serde_json::json!({"rating": 4, "comment": "Clear brief, slow payments."}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // A second review by the client is a conflict.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/reviews"),
        &client.access_token,
        serde_json::json!({"rating": 1, "comment": "Revising my opinion."}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Both reviews appear on the contract detail.
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}"),
        &client.access_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["reviews"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn review_rating_is_bounded(pool: PgPool) {
    let client = common::register_user(&pool, "client1", "CLIENT").await;
    let freelancer = common::register_user(&pool, "dev1", "FREELANCER").await;
    let contract_id = establish_contract(&pool, &client, &freelancer).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/reviews"),
        &client.access_token,
        serde_json::json!({"rating": 6, "comment": "Off the scale."}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
