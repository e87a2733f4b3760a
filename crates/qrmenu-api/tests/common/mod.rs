//! Shared harness: the assembled router over a fresh memory store.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use qrmenu_api::{build_router, AppState};
use qrmenu_core::repositories::Repositories;
use qrmenu_infrastructure::memory_repositories;
use qrmenu_shared::config::AppConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub set_cookie: Option<String>,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repositories(memory_repositories())
    }

    pub fn with_repositories(repos: Repositories) -> Self {
        let config = AppConfig::for_tests().expect("test config");
        let state = AppState::new(config, repos).expect("app state");
        Self {
            router: build_router(state),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response: Response<Body> = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        TestResponse {
            status,
            set_cookie,
            body,
        }
    }

    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        self.send(request).await
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.json(Method::GET, uri, cookie, None).await
    }

    pub async fn post(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.json(Method::POST, uri, cookie, Some(body)).await
    }

    /// Registers and logs in, returning the `name=value` cookie pair.
    pub async fn login_as(&self, email: &str) -> String {
        let register = self
            .post(
                "/api/auth/register",
                None,
                json!({ "email": email, "password": "password123" }),
            )
            .await;
        assert_eq!(register.status, StatusCode::CREATED, "{}", register.body);

        let login = self
            .post(
                "/api/auth/login",
                None,
                json!({ "email": email, "password": "password123" }),
            )
            .await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.body);
        cookie_pair(login.set_cookie.as_deref().expect("session cookie"))
    }

    pub async fn create_restaurant(&self, cookie: &str, name: &str) -> String {
        let res = self
            .post("/api/restaurants", Some(cookie), json!({ "name": name }))
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        id_of(&res)
    }
}

/// `auth_token=abc; HttpOnly; ...` → `auth_token=abc`
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

pub fn id_of(res: &TestResponse) -> String {
    res.body["data"]["id"]
        .as_str()
        .expect("id in response")
        .to_string()
}

/// Single-part multipart body with field name `file`.
pub fn multipart_request(content_type: &str, data: &[u8]) -> Request<Body> {
    let boundary = "qrmenu-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"file\"; filename=\"upload.bin\"\r\n",
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .expect("multipart request")
}
