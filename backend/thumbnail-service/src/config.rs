/// Configuration management for thumbnail-service
///
/// Loads configuration from environment variables with sensible defaults.
use crate::error::{AppError, Result};
use s3_utils::S3Config;

/// Destination bucket used when `THUMBNAIL_DEST_BUCKET` is unset
pub const DEFAULT_DESTINATION_BUCKET: &str = "image-resized-bucket-thumbnail";

#[derive(Clone, Debug)]
pub struct Config {
    /// Bucket receiving every generated thumbnail
    pub destination_bucket: String,
    pub s3: S3Config,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let destination_bucket = lookup("THUMBNAIL_DEST_BUCKET")
            .unwrap_or_else(|| DEFAULT_DESTINATION_BUCKET.to_string());
        let destination_bucket = destination_bucket.trim().to_string();

        if destination_bucket.is_empty() {
            return Err(AppError::Config(
                "THUMBNAIL_DEST_BUCKET must not be empty".to_string(),
            ));
        }

        Ok(Config {
            destination_bucket,
            s3: S3Config::from_lookup(&lookup),
        })
    }
}
