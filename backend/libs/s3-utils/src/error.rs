use thiserror::Error;

/// Errors from S3 object operations
#[derive(Debug, Error)]
pub enum S3Error {
    #[error("object s3://{bucket}/{key} not found")]
    NotFound { bucket: String, key: String },

    #[error("S3 request failed: {0}")]
    Request(String),

    #[error("failed to read S3 object body: {0}")]
    Body(String),
}
