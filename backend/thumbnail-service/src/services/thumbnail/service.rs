//! Thumbnail service - coordinates fetch, thumbnail generation and upload
//!
//! For every entry of a notification, in delivery order:
//! 1. Decode the source key
//! 2. Download the original from the source bucket
//! 3. Generate the thumbnail
//! 4. Upload it to the destination bucket as `thumb-<key>`
//!
//! The first failing entry aborts the invocation; entries already written
//! stay in place and a redelivery simply overwrites them.

use super::keys::{decode_source_key, destination_key};
use super::processor::{ProcessorError, ThumbnailProcessor};
use crate::error::{AppError, Result};
use crate::models::{Entry, ProcessResponse, S3Event};
use crate::services::storage::ObjectStore;
use std::sync::Arc;
use tracing::{error, info};

/// Thumbnail service for a single destination bucket
pub struct ThumbnailService<S> {
    store: S,
    processor: Arc<ThumbnailProcessor>,
    destination_bucket: String,
}

impl<S: ObjectStore> ThumbnailService<S> {
    /// Create a new thumbnail service writing into `destination_bucket`
    pub fn new(store: S, destination_bucket: impl Into<String>) -> Self {
        let destination_bucket = destination_bucket.into();
        info!(destination_bucket = %destination_bucket, "Thumbnail service initialized");

        Self {
            store,
            processor: Arc::new(ThumbnailProcessor::new()),
            destination_bucket,
        }
    }

    pub fn destination_bucket(&self) -> &str {
        &self.destination_bucket
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process every entry of the notification, stopping at the first error
    pub async fn process(&self, event: &S3Event) -> Result<ProcessResponse> {
        let total = event.records.len();
        info!(
            entries = total,
            destination_bucket = %self.destination_bucket(),
            "Processing S3 notification"
        );

        for (index, record) in event.records.iter().enumerate() {
            let entry = record.entry();
            info!(
                index,
                event_name = record.event_name.as_deref().unwrap_or("unknown"),
                bucket = %entry.source_bucket,
                key = %entry.source_key,
                size = ?record.s3.object.size,
                "Processing entry"
            );

            if let Err(e) = self.process_entry(&entry).await {
                error!(
                    index,
                    bucket = %entry.source_bucket,
                    key = %entry.source_key,
                    error = %e,
                    "Thumbnail generation failed, aborting invocation"
                );
                return Err(e);
            }
        }

        info!(entries = total, "All thumbnails generated");
        Ok(ProcessResponse::success())
    }

    /// Generate and store the thumbnail for a single entry
    pub async fn process_entry(&self, entry: &Entry) -> Result<()> {
        let source_key = decode_source_key(&entry.source_key);

        let original = self
            .store
            .get_object(&entry.source_bucket, &source_key)
            .await
            .map_err(|e| AppError::Retrieval {
                bucket: entry.source_bucket.clone(),
                key: source_key.clone(),
                message: e.to_string(),
            })?;
        let original_size = original.body.len();

        let thumbnail = self
            .processor
            .clone()
            .generate_async(original.body, source_key.clone())
            .await
            .map_err(|e| match e {
                ProcessorError::Decode(message) => AppError::Decode {
                    key: source_key.clone(),
                    message,
                },
                ProcessorError::Encode(message) => AppError::Encode {
                    key: source_key.clone(),
                    message,
                },
                ProcessorError::Task(message) => AppError::Internal(message),
            })?;

        let thumb_key = destination_key(&source_key);
        let thumb_size = thumbnail.data.len();
        self.store
            .put_object(
                &self.destination_bucket,
                &thumb_key,
                thumbnail.data,
                original.content_type,
            )
            .await
            .map_err(|e| AppError::Store {
                bucket: self.destination_bucket.clone(),
                key: thumb_key.clone(),
                message: e.to_string(),
            })?;

        info!(
            source_bucket = %entry.source_bucket,
            source_key = %source_key,
            thumb_key = %thumb_key,
            format = ?thumbnail.format,
            width = thumbnail.width,
            height = thumbnail.height,
            original_size,
            size = thumb_size,
            "Thumbnail created successfully"
        );

        Ok(())
    }
}
