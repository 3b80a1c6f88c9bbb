/// Error types for the thumbnail service
///
/// Every variant aborts the current invocation; the Lambda runtime reports it
/// to the platform, which owns redelivery.
use thiserror::Error;

/// Result type for thumbnail-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Source object missing or inaccessible
    #[error("Retrieval error for s3://{bucket}/{key}: {message}")]
    Retrieval {
        bucket: String,
        key: String,
        message: String,
    },

    /// Fetched bytes are not a decodable image
    #[error("Decode error for {key}: {message}")]
    Decode { key: String, message: String },

    /// Decoded image cannot be re-serialized in its source format
    #[error("Encode error for {key}: {message}")]
    Encode { key: String, message: String },

    /// Write to the destination store failed
    #[error("Store error for s3://{bucket}/{key}: {message}")]
    Store {
        bucket: String,
        key: String,
        message: String,
    },

    /// Invalid startup configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

