//! Object storage seam used by the thumbnail pipeline
//!
//! The pipeline only needs one read and one write per entry, so the trait is
//! kept to those two calls. Production uses [`S3Operations`]; tests substitute
//! a mock or an in-memory store.

use async_trait::async_trait;
use bytes::Bytes;
use s3_utils::{S3Error, S3Operations};
use thiserror::Error;

/// Source object as fetched from storage
#[derive(Debug, Clone)]
pub struct FetchedObject {
    pub body: Bytes,
    /// Declared content type, copied through unvalidated
    pub content_type: Option<String>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found")]
    NotFound,

    #[error("{0}")]
    Backend(String),
}

impl From<S3Error> for StorageError {
    fn from(err: S3Error) -> Self {
        match err {
            S3Error::NotFound { .. } => StorageError::NotFound,
            other => StorageError::Backend(other.to_string()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<FetchedObject, StorageError>;

    /// Overwrites any existing object at `key`
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: Option<String>,
    ) -> Result<(), StorageError>;
}

#[async_trait]
impl ObjectStore for S3Operations {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<FetchedObject, StorageError> {
        let object = S3Operations::get_object(self, bucket, key).await?;
        Ok(FetchedObject {
            body: object.body,
            content_type: object.content_type,
        })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: Option<String>,
    ) -> Result<(), StorageError> {
        Ok(S3Operations::put_object(self, bucket, key, body, content_type).await?)
    }
}
