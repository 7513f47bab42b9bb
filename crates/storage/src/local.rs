//! Filesystem-backed [`BlobStore`].

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::{public_object_url, validate_key, BlobStore, StorageError};

/// Stores objects at `{root}/{bucket}/{key}`.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalBlobStore {
    /// * `root` - Directory that holds one sub-directory per bucket.
    /// * `public_base_url` - Origin the API is reachable at, used to build URLs.
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        validate_key(bucket, key)?;

        let dest = self.root.join(bucket).join(key);
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // create_new: an existing object is an error, never overwritten.
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&dest)
            .await?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        tracing::debug!(path = %dest.display(), size = bytes.len(), "Stored object");
        Ok(public_object_url(&self.public_base_url, bucket, key))
    }
}
