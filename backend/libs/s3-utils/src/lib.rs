/// Shared S3 utilities
///
/// Provides S3 client construction, configuration, and the object
/// operations used by the thumbnail pipeline.
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client;
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod operations;

pub use config::S3Config;
pub use error::S3Error;
pub use operations::{ObjectData, S3Operations};

/// Shared S3 client wrapper
#[derive(Clone)]
pub struct S3Client {
    client: Arc<Client>,
    config: S3Config,
}

impl S3Client {
    /// Create new S3 client with custom configuration
    pub async fn with_config(config: S3Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(config.path_style);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        tracing::debug!(
            region = %config.region,
            endpoint = ?config.endpoint,
            path_style = config.path_style,
            "S3 client configured"
        );

        Self {
            client: Arc::new(Client::from_conf(builder.build())),
            config,
        }
    }

    /// Get S3 configuration
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Object operations sharing this client
    pub fn operations(&self) -> S3Operations {
        S3Operations::new(self.client.clone())
    }
}
