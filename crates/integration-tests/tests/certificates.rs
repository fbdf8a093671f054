//! Certificate lifecycle over HTTP.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::{Value, json};

use provenance_integration_tests::TestContext;

#[tokio::test]
async fn test_issue_certificate() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "A").await;

    let resp = ctx
        .create_certificate(
            "a@x.com",
            json!({"title": "T", "year": 2020, "note": "oil on canvas"}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert!(!resp.body["id"].as_str().unwrap().is_empty());
    assert_eq!(resp.body["title"], "T");
    assert_eq!(resp.body["year"], 2020);
    assert_eq!(resp.body["ownerId"], "a@x.com");
    assert_eq!(resp.body["note"], "oil on canvas");
    assert_eq!(resp.body["transfer"], Value::Null);
    assert!(resp.body["createdAt"].is_string());
}

#[tokio::test]
async fn test_issue_with_partial_body() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "A").await;

    let resp = ctx.create_certificate("a@x.com", json!({"title": "T"})).await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body["title"], "T");
    assert_eq!(resp.body["year"], 0);
    assert_eq!(resp.body["ownerId"], "a@x.com");

    let bare = ctx.create_certificate("a@x.com", json!({})).await;
    assert_eq!(bare.status, StatusCode::CREATED);
    assert_eq!(bare.body["title"], "");
}

#[tokio::test]
async fn test_issue_for_unregistered_user_fails() {
    let ctx = TestContext::new();

    let resp = ctx
        .create_certificate("ghost@x.com", json!({"title": "T", "year": 2020}))
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(ctx.certificates_of("ghost@x.com").await.body, json!([]));
}

#[tokio::test]
async fn test_preset_id_is_rejected() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "A").await;

    let resp = ctx
        .create_certificate(
            "a@x.com",
            json!({"id": "chosen-by-client", "title": "T", "year": 2020}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(ctx.certificates_of("a@x.com").await.body, json!([]));
}

#[tokio::test]
async fn test_update_changes_details_only() {
    let ctx = TestContext::new();
    let id = ctx.with_two_users_and_certificate().await;

    let resp = ctx
        .update_certificate(&id, json!({"title": "my new thing", "note": "some notes"}))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["id"], id.as_str());
    assert_eq!(resp.body["title"], "my new thing");
    assert_eq!(resp.body["note"], "some notes");
    assert_eq!(resp.body["year"], 2020);
    assert_eq!(resp.body["ownerId"], "a@x.com");
}

#[tokio::test]
async fn test_update_cannot_change_owner() {
    let ctx = TestContext::new();
    let id = ctx.with_two_users_and_certificate().await;

    let resp = ctx
        .update_certificate(&id, json!({"title": "stolen", "ownerId": "b@x.com"}))
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let owned = ctx.certificates_of("a@x.com").await.body;
    assert_eq!(owned[0]["title"], "T");
    assert_eq!(ctx.certificates_of("b@x.com").await.body, json!([]));
}

#[tokio::test]
async fn test_update_cannot_forge_transfer() {
    let ctx = TestContext::new();
    let id = ctx.with_two_users_and_certificate().await;

    let resp = ctx
        .update_certificate(
            &id,
            json!({"transfer": {"email": "b@x.com", "status": "accepted"}}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(ctx.certificates_of("b@x.com").await.body, json!([]));
}

#[tokio::test]
async fn test_delete_certificate() {
    let ctx = TestContext::new();
    let id = ctx.with_two_users_and_certificate().await;

    let resp = ctx.delete_certificate(&id).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert_eq!(ctx.certificates_of("a@x.com").await.body, json!([]));

    let again = ctx.delete_certificate(&id).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["httpStatus"], 404);

    let update = ctx.update_certificate(&id, json!({"title": "x"})).await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
}
