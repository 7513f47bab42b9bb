#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pawprint_api::config::{ServerConfig, StorageBackend};
use pawprint_api::router::build_app_router;
use pawprint_api::state::AppState;
use pawprint_core::cors::CorsPolicy;
use pawprint_core::pagination::PageSize;
use pawprint_storage::{BlobStore, StorageError};
use sqlx::PgPool;
use tower::ServiceExt;

/// Origin admitted by [`test_config`].
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Origin not on the allow-list.
pub const FOREIGN_ORIGIN: &str = "https://evil.example";

/// Build a test `ServerConfig` with the production defaults for paging and
/// attachments.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![
            ALLOWED_ORIGIN.to_string(),
            "https://*.vercel.app".to_string(),
        ],
        request_timeout_secs: 30,
        db_acquire_timeout_secs: 5,
        animals_page_size: PageSize::new(12, 100),
        events_page_size: PageSize::new(20, 100),
        max_attachment_bytes: 10 * 1024 * 1024,
        volunteer_consent_default: true,
        public_base_url: "http://localhost:3000".to_string(),
        storage: StorageBackend::Local {
            root: PathBuf::from("./target/test-storage"),
        },
    }
}

/// Build the full application router with a [`RecordingStore`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config(), Arc::new(RecordingStore::default()))
}

/// Build the full application router with an explicit config and blob store.
///
/// Goes through [`build_app_router`] so tests exercise the production
/// middleware stack (CORS gate, request ID, timeout, tracing, panic recovery).
pub fn build_test_app_with(
    pool: PgPool,
    config: ServerConfig,
    blob_store: Arc<dyn BlobStore>,
) -> Router {
    let cors = CorsPolicy::new(config.cors_origins.clone()).unwrap();
    let state = AppState {
        pool,
        config: Arc::new(config),
        cors: Arc::new(cors),
        blob_store,
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send a request with an optional `Origin` and JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    origin: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(origin) = origin {
        builder = builder.header("origin", origin);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// GET from the allowed origin.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(ALLOWED_ORIGIN), None).await
}

/// POST a JSON body from the allowed origin.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(ALLOWED_ORIGIN), Some(body)).await
}

/// POST raw bytes from the allowed origin.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("origin", ALLOWED_ORIGIN)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Blob store doubles
// ---------------------------------------------------------------------------

/// One recorded `put` call.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Accepts every upload and remembers it.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub objects: Mutex<Vec<StoredObject>>,
}

impl RecordingStore {
    pub fn stored(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for RecordingStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.objects.lock().unwrap().push(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            bytes,
            content_type: content_type.to_string(),
        });
        Ok(format!("https://cdn.test/{bucket}/{key}"))
    }
}

/// Rejects every upload.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl BlobStore for FailingStore {
    async fn put(
        &self,
        _bucket: &str,
        _key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        Err(StorageError::Api {
            status: 503,
            body: "storage unavailable".to_string(),
        })
    }
}
