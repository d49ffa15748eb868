//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use users_api::config::{DatabaseSettings, ServerSettings, Settings};
use users_api::presentation::http::routes;
use users_api::startup::AppState;

/// Test application wrapping the real router.
///
/// The database pool is created lazily, so requests that never reach the
/// repository (health, decode and validation failures) run without a
/// live PostgreSQL instance.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let settings = test_settings();
        let pool = PgPoolOptions::new()
            .connect_lazy(&settings.database.connection_url())
            .expect("Failed to create lazy test pool");

        let state = AppState {
            db: pool,
            settings: Arc::new(settings),
        };

        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: "postgres".into(),
            name: "users_test".into(),
            ssl_mode: "disable".into(),
            max_connections: 2,
            min_connections: 0,
            acquire_timeout: 1,
        },
        environment: "test".into(),
    }
}

/// Read a response body as parsed JSON
pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
