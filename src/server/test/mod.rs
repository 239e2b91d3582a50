//! Application-level test harness: real migrations on in-memory SQLite, an
//! in-memory object store and a recording mailer behind the production
//! `AppState`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use object_store::{memory::InMemory, path::Path};
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    external::{mail::testing::RecordingMailer, storage::ObjectFileStorage},
    router,
    state::AppState,
    util::crypto::FieldCipher,
};

mod router_test;

pub const PUBLIC_URL: &str = "https://cdn.example.com";

pub struct TestApp {
    pub state: AppState,
    pub mailer: Arc<RecordingMailer>,
    pub store: Arc<InMemory>,
    _context: TestContext,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_mailer(RecordingMailer::default()).await
    }

    pub async fn with_mailer(mailer: RecordingMailer) -> Self {
        let context = TestBuilder::new().with_migrations().build().await.unwrap();
        let db = context.db.clone().unwrap();

        let config = Config::for_tests();
        let store = Arc::new(InMemory::new());
        let storage = ObjectFileStorage::new(store.clone(), &config.storage.root_path, PUBLIC_URL);
        let mailer = Arc::new(mailer);

        let state = AppState::new(
            db,
            Arc::new(storage),
            mailer.clone(),
            FieldCipher::new(&config.app_key),
            config,
        );

        Self {
            state,
            mailer,
            store,
            _context: context,
        }
    }

    pub fn db(&self) -> &sea_orm::DatabaseConnection {
        &self.state.db
    }

    pub fn router(&self) -> Router {
        router::router().with_state(self.state.clone())
    }

    /// Sends `request` through the router and returns the status and the
    /// decoded envelope.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
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

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Object key behind a public URL returned by the storage.
    pub fn key_of(url: &str) -> Path {
        Path::from(url.trim_start_matches(PUBLIC_URL).trim_start_matches('/'))
    }
}

/// Multipart body with text fields and an optional file part.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let boundary = "personnel-test-boundary";
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                boundary, name, value
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                boundary, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    (format!("multipart/form-data; boundary={}", boundary), body)
}
