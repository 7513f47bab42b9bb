//! Object storage for report attachments.
//!
//! [`BlobStore`] is the seam between the submission handlers and wherever
//! files end up. Two backends ship:
//!
//! - [`LocalBlobStore`] writes under a directory on disk; the API serves it
//!   back at `/storage/v1/object/public/...`.
//! - [`SupabaseBlobStore`] uploads through the Supabase Storage REST API.
//!
//! Both return the public URL of the stored object.

pub mod local;
pub mod supabase;

use async_trait::async_trait;

pub use local::LocalBlobStore;
pub use supabase::SupabaseBlobStore;

/// URL path segment under which public objects are served.
pub const PUBLIC_OBJECT_PATH: &str = "storage/v1/object/public";

/// Errors from a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The bucket or key would escape the storage root or is empty.
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage API answered with a non-2xx status.
    #[error("Storage API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// A place to put attachment bytes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` at `bucket/key` and return the object's public URL.
    ///
    /// Never overwrites an existing object.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;
}

/// `{base}/storage/v1/object/public/{bucket}/{key}`.
pub fn public_object_url(base_url: &str, bucket: &str, key: &str) -> String {
    format!(
        "{}/{PUBLIC_OBJECT_PATH}/{bucket}/{key}",
        base_url.trim_end_matches('/')
    )
}

/// Reject empty, absolute or parent-relative path segments.
pub(crate) fn validate_key(bucket: &str, key: &str) -> Result<(), StorageError> {
    let path = format!("{bucket}/{key}");
    let bad = bucket.is_empty()
        || key.is_empty()
        || key.starts_with('/')
        || path
            .split('/')
            .any(|seg| seg.is_empty() || seg == "." || seg == ".." || seg.contains('\\'));
    if bad {
        return Err(StorageError::InvalidKey(path));
    }
    Ok(())
}
