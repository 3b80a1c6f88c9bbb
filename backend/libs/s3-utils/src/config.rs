/// S3 client configuration shared across services
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// AWS region
    pub region: String,
    /// Custom endpoint (LocalStack, MinIO); None uses the regional AWS endpoint
    pub endpoint: Option<String>,
    /// Whether to use path-style addressing (false = virtual-hosted-style)
    pub path_style: bool,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            endpoint: None,
            path_style: false,
        }
    }
}

impl S3Config {
    /// Load S3 configuration through a variable lookup (usually `std::env::var`)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            region: lookup("AWS_REGION")
                .or_else(|| lookup("AWS_DEFAULT_REGION"))
                .unwrap_or(defaults.region),
            endpoint: lookup("S3_ENDPOINT").filter(|e| !e.trim().is_empty()),
            path_style: lookup("S3_PATH_STYLE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.path_style),
        }
    }
}
