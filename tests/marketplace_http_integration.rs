//! Integration tests for the marketplace trust flows.
//!
//! Acquisition, reviews, certification claims, and admin moderation,
//! driven through the axum router with in-memory repositories.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use cardmarket::adapters::http::{api_router, AppState};
use cardmarket::adapters::memory::{
    InMemoryAccountRepository, InMemoryCardRepository, InMemoryCertificationRepository,
    InMemoryPurchaseRepository, InMemoryReviewRepository,
};
use cardmarket::config::ServerConfig;
use cardmarket::domain::account::Account;
use cardmarket::domain::foundation::{Timestamp, UserId, UserRole};
use cardmarket::ports::AccountRepository;

const COMPLETE_CONTENT: &str = "# Problem Definition\nA\n\
# Target Audience\nB\n\
# Solution Overview\nC\n\
# Contents\nD\n\
# Usage Notes & Limitations\nE";

struct TestApp {
    router: Router,
    accounts: Arc<InMemoryAccountRepository>,
}

fn test_app() -> TestApp {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let state = AppState {
        cards: Arc::new(InMemoryCardRepository::new()),
        purchases: Arc::new(InMemoryPurchaseRepository::new()),
        reviews: Arc::new(InMemoryReviewRepository::new()),
        certifications: Arc::new(InMemoryCertificationRepository::new()),
        accounts: accounts.clone(),
    };
    TestApp {
        router: api_router(state, &ServerConfig::default()),
        accounts,
    }
}

fn request(
    method: &str,
    uri: &str,
    body: Option<Value>,
    user: &str,
    role: &str,
    approved: &str,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-User-Id", user)
        .header("X-User-Role", role)
        .header("X-Seller-Approved", approved)
        .header("content-type", "application/json");
    match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn as_seller(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    request(method, uri, body, "seller-1", "SELLER", "true")
}

fn as_buyer(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    request(method, uri, body, "buyer-1", "BUYER", "false")
}

fn as_admin(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    request(method, uri, body, "admin-1", "ADMIN", "false")
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Publishes a card as seller-1 and returns its ID.
async fn published_card(router: &Router) -> String {
    let payload = json!({
        "title": "Pricing Playbook",
        "summary": "How we price B2B SaaS",
        "markdownContent": COMPLETE_CONTENT,
        "category": "pricing",
        "type": "PLAYBOOK",
        "licenseType": "TEAM",
        "status": "PUBLISHED"
    });
    let (status, body) = send(router, as_seller("POST", "/api/cards", Some(payload))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn acquisition_is_free_and_idempotent() {
    let app = test_app();
    let card_id = published_card(&app.router).await;
    let uri = format!("/api/purchases/{}", card_id);

    let (status, first) = send(&app.router, as_buyer("POST", &uri, None)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["alreadyOwned"], false);
    assert_eq!(first["purchase"]["priceCents"], 0);

    let (status, second) = send(&app.router, as_buyer("POST", &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["alreadyOwned"], true);
    assert_eq!(second["purchase"]["id"], first["purchase"]["id"]);

    let (status, library) = send(&app.router, as_buyer("GET", "/api/purchases", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(library.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn acquiring_a_missing_card_is_404() {
    let app = test_app();
    let (status, _) = send(
        &app.router,
        as_buyer(
            "POST",
            "/api/purchases/3f9e1c34-5f6f-4a7e-9d2a-111111111111",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn review_requires_purchase_and_rejects_duplicates() {
    let app = test_app();
    let card_id = published_card(&app.router).await;
    let review = json!({
        "cardId": card_id,
        "rating": 4,
        "content": "Saved us a quarter of guesswork"
    });

    let (status, body) = send(
        &app.router,
        as_buyer("POST", "/api/reviews", Some(review.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "You must purchase this card before reviewing it"
    );

    send(
        &app.router,
        as_buyer("POST", &format!("/api/purchases/{}", card_id), None),
    )
    .await;

    let (status, _) = send(
        &app.router,
        as_buyer("POST", "/api/reviews", Some(review.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app.router, as_buyer("POST", "/api/reviews", Some(review))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "You have already reviewed this card");
}

#[tokio::test]
async fn out_of_range_rating_is_400() {
    let app = test_app();
    let card_id = published_card(&app.router).await;
    send(
        &app.router,
        as_buyer("POST", &format!("/api/purchases/{}", card_id), None),
    )
    .await;

    let (status, _) = send(
        &app.router,
        as_buyer(
            "POST",
            "/api/reviews",
            Some(json!({"cardId": card_id, "rating": 6, "content": "x"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_shows_up_in_card_detail_with_average() {
    let app = test_app();
    let card_id = published_card(&app.router).await;
    send(
        &app.router,
        as_buyer("POST", &format!("/api/purchases/{}", card_id), None),
    )
    .await;
    send(
        &app.router,
        as_buyer(
            "POST",
            "/api/reviews",
            Some(json!({"cardId": card_id, "rating": 5, "content": "Excellent"})),
        ),
    )
    .await;

    let (_, detail) = send(
        &app.router,
        as_buyer("GET", &format!("/api/cards/{}", card_id), None),
    )
    .await;
    assert_eq!(detail["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(detail["averageRating"], 5.0);
    assert_eq!(detail["owned"], true);
}

#[tokio::test]
async fn certification_flow_from_claim_to_verification() {
    let app = test_app();
    let card_id = published_card(&app.router).await;
    send(
        &app.router,
        as_buyer("POST", &format!("/api/purchases/{}", card_id), None),
    )
    .await;

    let claim = json!({
        "cardId": card_id,
        "problemSolved": "Pricing a new tier",
        "howUsed": "Ran the worksheets with the team",
        "outcome": "Shipped new pricing in two weeks",
        "proofLinks": ["https://example.com/launch"]
    });
    let (status, submitted) = send(
        &app.router,
        as_buyer("POST", "/api/certifications", Some(claim)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(submitted["verified"], false);
    let certification_id = submitted["id"].as_str().unwrap().to_string();

    let (status, queue) = send(
        &app.router,
        as_admin("GET", "/api/admin/certifications", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue.as_array().unwrap().len(), 1);

    let (status, verified) = send(
        &app.router,
        as_admin(
            "POST",
            "/api/admin/certifications",
            Some(json!({"certificationId": certification_id, "decision": "verify"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["verified"], true);

    let (_, detail) = send(
        &app.router,
        as_buyer("GET", &format!("/api/cards/{}", card_id), None),
    )
    .await;
    assert_eq!(detail["verifiedCertifications"], 1);
}

#[tokio::test]
async fn rejected_certification_is_deleted() {
    let app = test_app();
    let card_id = published_card(&app.router).await;
    send(
        &app.router,
        as_buyer("POST", &format!("/api/purchases/{}", card_id), None),
    )
    .await;
    let (_, submitted) = send(
        &app.router,
        as_buyer(
            "POST",
            "/api/certifications",
            Some(json!({
                "cardId": card_id,
                "problemSolved": "p",
                "howUsed": "h",
                "outcome": "o"
            })),
        ),
    )
    .await;
    let certification_id = submitted["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app.router,
        as_admin(
            "POST",
            "/api/admin/certifications",
            Some(json!({"certificationId": certification_id, "decision": "reject"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, queue) = send(
        &app.router,
        as_admin("GET", "/api/admin/certifications", None),
    )
    .await;
    assert!(queue.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn certification_requires_purchase() {
    let app = test_app();
    let card_id = published_card(&app.router).await;

    let (status, body) = send(
        &app.router,
        as_buyer(
            "POST",
            "/api/certifications",
            Some(json!({
                "cardId": card_id,
                "problemSolved": "p",
                "howUsed": "h",
                "outcome": "o"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "You must purchase this card before certifying it"
    );
}

#[tokio::test]
async fn admin_routes_reject_non_admins() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        as_buyer("GET", "/api/admin/certifications", None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Admin access required");

    let (status, _) = send(&app.router, as_seller("GET", "/api/admin/sellers", None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn seller_application_is_approved_by_an_admin() {
    let app = test_app();
    // Applying for sellerhood sets the role; the flag waits on an admin.
    let applicant = Account::reconstitute(
        UserId::new("applicant-1").unwrap(),
        UserRole::Seller,
        false,
        Timestamp::now(),
    );
    app.accounts.save(&applicant).await.unwrap();

    let (status, pending) = send(&app.router, as_admin("GET", "/api/admin/sellers", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending.as_array().unwrap().len(), 1);
    assert_eq!(pending[0]["userId"], "applicant-1");

    let (status, approved) = send(
        &app.router,
        as_admin(
            "POST",
            "/api/admin/sellers",
            Some(json!({"userId": "applicant-1", "decision": "approve"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["sellerApproved"], true);
    assert_eq!(approved["role"], "SELLER");

    let (_, pending) = send(&app.router, as_admin("GET", "/api/admin/sellers", None)).await;
    assert!(pending.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn rejected_seller_returns_to_buyer() {
    let app = test_app();
    let applicant = Account::reconstitute(
        UserId::new("applicant-2").unwrap(),
        UserRole::Seller,
        false,
        Timestamp::now(),
    );
    app.accounts.save(&applicant).await.unwrap();

    let (status, rejected) = send(
        &app.router,
        as_admin(
            "POST",
            "/api/admin/sellers",
            Some(json!({"userId": "applicant-2", "decision": "reject"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["role"], "BUYER");
    assert_eq!(rejected["sellerApproved"], false);
}
