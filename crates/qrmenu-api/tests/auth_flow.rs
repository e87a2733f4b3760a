//! Session and ownership behaviour over HTTP.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::{DateTime, Utc};
use common::{cookie_pair, TestApp};
use qrmenu_core::repositories::SessionRepository;
use qrmenu_core::DomainError;
use qrmenu_infrastructure::memory_repositories;
use qrmenu_security::Session;
use serde_json::json;

/// Session store whose deletes always fail.
struct UndeletableSessions(Arc<dyn SessionRepository>);

#[async_trait]
impl SessionRepository for UndeletableSessions {
    async fn create(&self, session: &Session) -> Result<(), DomainError> {
        self.0.create(session).await
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError> {
        self.0.find_by_token_hash(token_hash).await
    }

    async fn delete_by_token_hash(&self, _token_hash: &str) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".to_string()))
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        self.0.delete_expired(now).await
    }
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new();
    let body = json!({ "email": "dup@example.com", "password": "password123" });

    let first = app.post("/api/auth/register", None, body.clone()).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body["data"]["name"], json!("dup"));
    assert_eq!(first.body["data"]["role"], json!("RESTAURANT_OWNER"));
    assert!(first.body["data"].get("passwordHash").is_none());

    let second = app.post("/api/auth/register", None, body).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], json!("User already exists"));
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::new();
    app.post(
        "/api/auth/register",
        None,
        json!({ "email": "a@example.com", "password": "password123", "name": "Ana" }),
    )
    .await;

    let login = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "a@example.com", "password": "password123" }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["message"], json!("Login successful"));

    let set_cookie = login.set_cookie.unwrap_or_default();
    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=86400"));

    let me = app.get("/api/auth/me", Some(&cookie_pair(&set_cookie))).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], json!("a@example.com"));
    assert_eq!(me.body["data"]["name"], json!("Ana"));
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.login_as("a@example.com").await;

    let res = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "a@example.com", "password": "wrong-password" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert!(res.set_cookie.is_none());
}

#[tokio::test]
async fn test_password_length_bounds() {
    let app = TestApp::new();

    let short = app
        .post(
            "/api/auth/register",
            None,
            json!({ "email": "short@example.com", "password": "pw12" }),
        )
        .await;
    assert_eq!(short.status, StatusCode::CREATED);

    let login = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "short@example.com", "password": "pw12" }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let oversized = app
        .post(
            "/api/auth/register",
            None,
            json!({ "email": "long@example.com", "password": "x".repeat(129) }),
        )
        .await;
    assert_eq!(oversized.status, StatusCode::BAD_REQUEST);
    assert_eq!(oversized.body["error"], json!("Password must be at most 128 characters"));
}

#[tokio::test]
async fn test_missing_credentials() {
    let app = TestApp::new();
    let res = app.post("/api/auth/login", None, json!({ "email": "a@example.com" })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], json!("Email and password are required"));
}

#[tokio::test]
async fn test_forged_cookie_is_rejected() {
    let app = TestApp::new();
    app.login_as("a@example.com").await;

    let forged = format!("auth_token={}", "ab".repeat(32));
    let res = app.get("/api/auth/me", Some(&forged)).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["error"], json!("Not authenticated"));

    let none = app.get("/api/auth/me", None).await;
    assert_eq!(none.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = TestApp::new();
    let cookie = app.login_as("a@example.com").await;

    let logout = app
        .json(Method::POST, "/api/auth/logout", Some(&cookie), None)
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body["message"], json!("Logged out successfully"));
    assert!(logout.set_cookie.unwrap_or_default().starts_with("auth_token="));

    let me = app.get("/api/auth/me", Some(&cookie)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie_when_store_fails() {
    let mut repos = memory_repositories();
    repos.sessions = Arc::new(UndeletableSessions(repos.sessions.clone()));
    let app = TestApp::with_repositories(repos);
    let cookie = app.login_as("a@example.com").await;

    let logout = app
        .json(Method::POST, "/api/auth/logout", Some(&cookie), None)
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    let set_cookie = logout.set_cookie.unwrap_or_default();
    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_other_user_cannot_modify_restaurant() {
    let app = TestApp::new();
    let owner = app.login_as("owner@example.com").await;
    let intruder = app.login_as("intruder@example.com").await;
    let restaurant_id = app.create_restaurant(&owner, "Cafe").await;
    let uri = format!("/api/restaurants/{}", restaurant_id);

    let patch = app
        .json(Method::PATCH, &uri, Some(&intruder), Some(json!({ "name": "Mine" })))
        .await;
    assert_eq!(patch.status, StatusCode::FORBIDDEN);

    let delete = app.json(Method::DELETE, &uri, Some(&intruder), None).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let category = app
        .post(
            "/api/categories",
            Some(&intruder),
            json!({ "restaurantId": restaurant_id, "name": "Sneaky" }),
        )
        .await;
    assert_eq!(category.status, StatusCode::FORBIDDEN);

    let listed = app.get("/api/restaurants", Some(&intruder)).await;
    assert_eq!(listed.body["data"], json!([]));

    let still_there = app.get(&uri, None).await;
    assert_eq!(still_there.body["data"]["name"], json!("Cafe"));
}

#[tokio::test]
async fn test_mutations_require_session() {
    let app = TestApp::new();
    let res = app
        .post("/api/restaurants", None, json!({ "name": "Cafe" }))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_json_uses_envelope() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let res = app.send(request).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["success"], json!(false));
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new();
    let health = app.get("/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], json!("healthy"));

    let ready = app.get("/health/ready", None).await;
    assert_eq!(ready.status, StatusCode::OK);
}
