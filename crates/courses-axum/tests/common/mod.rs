//! Shared fixtures for the HTTP contract tests.
//!
//! Every `TestApp` owns a private in-memory database, so tests never see each
//! other's rows and nothing needs cleaning up afterwards.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use courses_axum::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use courses_axum::routes::create_router;
use courses_db::{CourseFactory, StudentFactory, TestDb};

/// Boundary used by `TestApp::send_multipart`.
const MULTIPART_BOUNDARY: &str = "courses-test-boundary";

/// Collection URL, exactly as clients write it.
pub const URL: &str = "/api/v1/courses/";

/// Item URL for a course id.
pub fn course_url(id: i64) -> String {
    format!("{URL}{id}/")
}

/// Config for tests. The database path is never opened; `TestApp` injects
/// its own in-memory database.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path: "/nonexistent/courses.db".into(),
        cors: CorsConfig::AllowAll,
        api_token: None,
    }
}

/// In-process API plus direct access to its database.
pub struct TestApp {
    pub db: TestDb,
    router: Router,
    token: Option<String>,
}

/// A fully buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parse the body as JSON, panicking with the raw body on failure.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// App without authentication.
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        let db = TestDb::new().await.unwrap();
        let ctx = AxumContext::new(Arc::new(db.app_core()));
        let router = create_router(ctx, &config);

        Self {
            db,
            router,
            token: config.api_token,
        }
    }

    pub fn students(&self) -> StudentFactory {
        self.db.students()
    }

    pub fn courses(&self) -> CourseFactory {
        self.db.courses()
    }

    pub async fn course_count(&self) -> i64 {
        self.db.course_count().await.unwrap()
    }

    /// Send a request, adding the configured bearer token if it has none.
    pub async fn send(&self, mut request: Request<Body>) -> TestResponse {
        if let Some(token) = &self.token {
            if !request.headers().contains_key(header::AUTHORIZATION) {
                request.headers_mut().insert(
                    header::AUTHORIZATION,
                    format!("Bearer {token}").parse().unwrap(),
                );
            }
        }

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> TestResponse {
        self.send_json(Method::POST, uri, body).await
    }

    pub async fn patch(&self, uri: &str, body: &Value) -> TestResponse {
        self.send_json(Method::PATCH, uri, body).await
    }

    pub async fn put(&self, uri: &str, body: &Value) -> TestResponse {
        self.send_json(Method::PUT, uri, body).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Send text fields as a `multipart/form-data` body.
    pub async fn send_multipart(
        &self,
        method: Method,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> TestResponse {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"\r\n\r\n\
                 {value}\r\n"
            ));
        }
        body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));

        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: &Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}
