//! End-to-end HTTP tests for the provenance server.
//!
//! Tests run the real router in-process with `tower::ServiceExt::oneshot`,
//! so no listening server or external service is needed:
//!
//! ```bash
//! cargo test -p provenance-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `tests/users.rs` - registration and owner listings
//! - `tests/certificates.rs` - certificate lifecycle
//! - `tests/transfers.rs` - propose/accept workflow and races

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use provenance_server::config::ServerConfig;
use provenance_server::middleware::USER_EMAIL_HEADER;
use provenance_server::state::AppState;
use provenance_server::store::Store;

/// A decoded HTTP response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// A fresh server with an empty store.
///
/// Cloning shares the same store, so clones can be moved into spawned tasks.
#[derive(Clone)]
pub struct TestContext {
    app: Router,
    state: AppState,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(ServerConfig::default(), Store::new());
        Self {
            app: provenance_server::app(state.clone()),
            state,
        }
    }

    /// Direct access to the store for setup and assertions.
    #[must_use]
    pub fn store(&self) -> &Store {
        self.state.store()
    }

    /// Send a request, optionally as `user` and with a JSON body.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(user) = user {
            builder = builder.header(USER_EMAIL_HEADER, user);
        }
        let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    pub async fn register(&self, email: &str, name: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/users",
            None,
            Some(json!({"email": email, "name": name})),
        )
        .await
    }

    pub async fn create_certificate(&self, user: &str, body: Value) -> TestResponse {
        self.request(Method::POST, "/certificates", Some(user), Some(body))
            .await
    }

    pub async fn update_certificate(&self, id: &str, body: Value) -> TestResponse {
        self.request(Method::PATCH, &format!("/certificates/{id}"), None, Some(body))
            .await
    }

    pub async fn delete_certificate(&self, id: &str) -> TestResponse {
        self.request(Method::DELETE, &format!("/certificates/{id}"), None, None)
            .await
    }

    pub async fn propose_transfer(&self, id: &str, to: &str) -> TestResponse {
        self.request(
            Method::POST,
            &format!("/certificates/{id}/transfers"),
            None,
            Some(json!({"email": to})),
        )
        .await
    }

    pub async fn accept_transfer(&self, id: &str) -> TestResponse {
        self.request(
            Method::PATCH,
            &format!("/certificates/{id}/transfers"),
            None,
            Some(json!({"status": "accepted"})),
        )
        .await
    }

    pub async fn certificates_of(&self, user: &str) -> TestResponse {
        self.request(
            Method::GET,
            &format!("/users/{user}/certificates"),
            None,
            None,
        )
        .await
    }

    /// Register `a@x.com` and `b@x.com`, and issue one certificate to `a`.
    /// Returns the certificate id.
    pub async fn with_two_users_and_certificate(&self) -> String {
        assert_eq!(self.register("a@x.com", "A").await.status, StatusCode::CREATED);
        assert_eq!(self.register("b@x.com", "B").await.status, StatusCode::CREATED);

        let created = self
            .create_certificate("a@x.com", json!({"title": "T", "year": 2020}))
            .await;
        assert_eq!(created.status, StatusCode::CREATED);
        created.body["id"].as_str().unwrap().to_owned()
    }
}
