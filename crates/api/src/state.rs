use std::sync::Arc;

use pawprint_core::cors::CorsPolicy;
use pawprint_storage::{BlobStore, LocalBlobStore, SupabaseBlobStore};

use crate::config::{ServerConfig, StorageBackend};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already a handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pawprint_db::DbPool,
    /// Server configuration (page sizes, attachment cap, consent default).
    pub config: Arc<ServerConfig>,
    /// Origin allow-list applied by the CORS gate.
    pub cors: Arc<CorsPolicy>,
    /// Destination for report attachments.
    pub blob_store: Arc<dyn BlobStore>,
}

/// Build the blob store selected by `config.storage`.
pub fn build_blob_store(config: &ServerConfig) -> Arc<dyn BlobStore> {
    match &config.storage {
        StorageBackend::Local { root } => {
            Arc::new(LocalBlobStore::new(root.clone(), config.public_base_url.clone()))
        }
        StorageBackend::Supabase { url, service_key } => {
            Arc::new(SupabaseBlobStore::new(url.clone(), service_key.clone()))
        }
    }
}
