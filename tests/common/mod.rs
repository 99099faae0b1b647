use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use kpi_tracker::server::{AppState, create_router};
use kpi_tracker::store::{SqliteStore, Store};

/// Router over a fresh database in its own temp directory.
pub struct TestApp {
    pub temp_dir: TempDir,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = SqliteStore::new(temp_dir.path().join("kpi.db")).expect("open store");
        store.initialize().expect("initialize schema");

        let router = create_router(Arc::new(AppState::new(Arc::new(store))));
        Self { temp_dir, router }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).expect("build request");
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::delete(uri)
            .body(Body::empty())
            .expect("build request");
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request");
        self.send(request).await
    }

    /// Adds a staff member and returns its id.
    pub async fn add_staff(&self, name: &str) -> i64 {
        let (status, body) = self
            .post("/api/v1/staff", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "add staff: {body}");
        body["data"]["id"].as_i64().expect("staff id")
    }
}
