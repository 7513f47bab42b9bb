//! Supabase Storage REST backend.
//!
//! Uploads with `POST {url}/storage/v1/object/{bucket}/{key}` authenticated
//! by the service-role key, then hands back the bucket's public URL.

use async_trait::async_trait;

use crate::{public_object_url, validate_key, BlobStore, StorageError};

/// HTTP client for one Supabase project's storage API.
pub struct SupabaseBlobStore {
    client: reqwest::Client,
    project_url: String,
    service_key: String,
}

impl SupabaseBlobStore {
    /// * `project_url` - e.g. `https://abc.supabase.co`.
    /// * `service_key` - Service-role key; sent as bearer token and `apikey`.
    pub fn new(project_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), project_url, service_key)
    }

    pub fn with_client(
        client: reqwest::Client,
        project_url: impl Into<String>,
        service_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            project_url: project_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }
}

#[async_trait]
impl BlobStore for SupabaseBlobStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        validate_key(bucket, key)?;

        let response = self
            .client
            .post(format!("{}/storage/v1/object/{bucket}/{key}", self.project_url))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StorageError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(public_object_url(&self.project_url, bucket, key))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use assert_matches::assert_matches;
    use axum::body::Bytes;
    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;

    use super::*;

    #[derive(Debug, Default, Clone)]
    struct Seen {
        path: String,
        authorization: String,
        apikey: String,
        content_type: String,
        upsert: String,
        body: Vec<u8>,
    }

    type Recorder = Arc<Mutex<Option<Seen>>>;

    async fn record(
        State(recorder): State<Recorder>,
        Path(path): Path<String>,
        headers: HeaderMap,
        body: Bytes,
    ) -> StatusCode {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        *recorder.lock().unwrap() = Some(Seen {
            path,
            authorization: header("authorization"),
            apikey: header("apikey"),
            content_type: header("content-type"),
            upsert: header("x-upsert"),
            body: body.to_vec(),
        });
        StatusCode::OK
    }

    /// Serve `app` on an ephemeral port and return its base URL.
    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn put_uploads_with_service_key_and_returns_public_url() {
        let recorder: Recorder = Arc::default();
        let app = Router::new()
            .route("/storage/v1/object/{*path}", post(record))
            .with_state(recorder.clone());
        let base = spawn(app).await;

        let store = SupabaseBlobStore::new(format!("{base}/"), "service-key");
        let url = store
            .put("reports", "reports/report_1_abc123.png", b"png".to_vec(), "image/png")
            .await
            .unwrap();

        assert_eq!(
            url,
            format!("{base}/storage/v1/object/public/reports/reports/report_1_abc123.png")
        );
        let seen = recorder.lock().unwrap().clone().unwrap();
        assert_eq!(seen.path, "reports/reports/report_1_abc123.png");
        assert_eq!(seen.authorization, "Bearer service-key");
        assert_eq!(seen.apikey, "service-key");
        assert_eq!(seen.content_type, "image/png");
        assert_eq!(seen.upsert, "false");
        assert_eq!(seen.body, b"png");
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let app = Router::new().route(
            "/storage/v1/object/{*path}",
            post(|| async { (StatusCode::CONFLICT, "The resource already exists") }),
        );
        let base = spawn(app).await;

        let store = SupabaseBlobStore::new(base, "service-key");
        let result = store.put("reports", "a.jpg", Vec::new(), "image/jpeg").await;

        assert_matches!(
            result,
            Err(StorageError::Api { status: 409, body }) if body.contains("already exists")
        );
    }
}
