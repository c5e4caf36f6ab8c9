//! Shared helpers for the router integration tests.
#![allow(dead_code)]

use autocomplete::api::{AppState, create_router};
use autocomplete::clock::{Clock, fixed_clock};
use autocomplete::config::Config;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;
use tower::util::ServiceExt;
use wiremock::MockServer;

/// Nothing listens on port 1, so connecting fails straight away.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
}

pub fn test_config(db_addr: &str, passthrough_url: &str) -> Config {
    Config {
        db_addr: db_addr.to_string(),
        movie_index: "movies".to_string(),
        passthrough_url: passthrough_url.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn build_app(config: &Config, clock: Clock) -> Router {
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(config.request_timeout)
        .build()
        .unwrap();
    create_router(AppState::new(config, http, clock))
}

/// App whose document store lives under `/db` on the mock server.
pub fn app_with_store(server: &MockServer) -> Router {
    let config = test_config(&format!("{}/db", server.uri()), UNREACHABLE);
    build_app(&config, fixed_clock(test_time()))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
