//! Common test utilities for integration tests
//!
//! Every test gets its own wiremock server standing in for the hosted
//! backend, so no external services are needed.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pantry_tracker_backend::{
    config::{AppConfig, BaasConfig, ServerConfig},
    routes,
    state::AppState,
};
use tower::ServiceExt;
use wiremock::MockServer;

pub const ANON_KEY: &str = "test-anon-key";
pub const SERVICE_KEY: &str = "test-service-role-key";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub baas: MockServer,
}

impl TestApp {
    /// Create a new test application backed by a fresh mock server
    pub async fn new() -> Self {
        let baas = MockServer::start().await;
        let state = AppState::new(test_config(&baas.uri())).expect("Failed to build state");
        let app = routes::create_router(state);

        Self { app, baas }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config(baas_url: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        },
        baas: BaasConfig {
            url: baas_url.to_string(),
            anon_key: ANON_KEY.to_string(),
            service_role_key: SERVICE_KEY.to_string(),
            profiles_table: "user_profiles".to_string(),
            request_timeout_ms: 2_000,
        },
    }
}
