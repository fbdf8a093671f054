//! Registration and per-owner listing over HTTP.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use provenance_integration_tests::TestContext;

#[tokio::test]
async fn test_register_returns_user() {
    let ctx = TestContext::new();

    let resp = ctx.register("a@x.com", "A").await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body["email"], "a@x.com");
    assert_eq!(resp.body["name"], "A");
}

#[tokio::test]
async fn test_register_accepts_plain_name_as_email() {
    let ctx = TestContext::new();

    let resp = ctx.register("bob", "Bob").await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body["email"], "bob");

    let cert = ctx
        .create_certificate("bob", json!({"title": "T", "year": 2020}))
        .await;
    assert_eq!(cert.status, StatusCode::CREATED);
    assert_eq!(cert.body["ownerId"], "bob");
}

#[tokio::test]
async fn test_emails_are_unique() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "A").await;

    let resp = ctx.register("a@x.com", "Someone Else").await;

    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(ctx.store().user("a@x.com").unwrap().name, "A");
}

#[tokio::test]
async fn test_listing_unknown_owner_is_empty() {
    let ctx = TestContext::new();

    let resp = ctx.certificates_of("nobody@x.com").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!([]));
}

#[tokio::test]
async fn test_listing_only_owned_and_stable() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "A").await;
    ctx.register("b@x.com", "B").await;

    let mut created = Vec::new();
    for title in ["first", "second", "third"] {
        let resp = ctx
            .create_certificate("a@x.com", json!({"title": title, "year": 2001}))
            .await;
        created.push(resp.body["id"].clone());
    }
    ctx.create_certificate("b@x.com", json!({"title": "other", "year": 2001}))
        .await;

    let first = ctx.certificates_of("a@x.com").await;
    let second = ctx.certificates_of("a@x.com").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);

    let listed = first.body.as_array().unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed.iter().all(|c| c["ownerId"] == "a@x.com"));

    let mut ids: Vec<_> = listed.iter().map(|c| c["id"].to_string()).collect();
    let mut expected: Vec<_> = created.iter().map(ToString::to_string).collect();
    ids.sort();
    expected.sort();
    assert_eq!(ids, expected);
}
