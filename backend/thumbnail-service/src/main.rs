//! Thumbnail Lambda
//!
//! Generates a thumbnail for every object announced by an S3 object-created
//! notification and stores it in the thumbnail bucket.
//!
//! Environment variables:
//! - THUMBNAIL_DEST_BUCKET: Destination bucket (default: "image-resized-bucket-thumbnail")
//! - AWS_REGION: AWS region (default: "us-east-1")
//! - S3_ENDPOINT: Optional custom S3 endpoint (LocalStack, MinIO)
//! - S3_PATH_STYLE: Use path-style addressing (default: false)
//! - RUST_LOG: Log filter (default: thumbnail_service=info,s3_utils=info)

use lambda_runtime::{run, service_fn, Error};
use s3_utils::S3Client;
use thumbnail_service::handler::function_handler;
use thumbnail_service::services::thumbnail::ThumbnailService;
use thumbnail_service::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("thumbnail_service=info,s3_utils=info")
            }),
        )
        .with_target(false)
        .without_time()
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // One client per container, reused across invocations
    let s3_client = S3Client::with_config(config.s3).await;
    info!(
        destination_bucket = %config.destination_bucket,
        region = %s3_client.config().region,
        endpoint = ?s3_client.config().endpoint,
        "Configuration loaded"
    );

    let service = ThumbnailService::new(s3_client.operations(), config.destination_bucket);

    run(service_fn(|event| function_handler(event, &service))).await
}
