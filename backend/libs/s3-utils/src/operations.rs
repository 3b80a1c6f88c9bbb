/// S3 object download and upload
use crate::error::S3Error;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Object body together with its declared content type
#[derive(Debug, Clone)]
pub struct ObjectData {
    pub body: Bytes,
    pub content_type: Option<String>,
}

#[derive(Clone)]
pub struct S3Operations {
    client: Arc<Client>,
}

impl S3Operations {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Download an object and its content type
    pub async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectData, S3Error> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    S3Error::NotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                } else {
                    S3Error::Request(DisplayErrorContext(&err).to_string())
                }
            })?;

        let content_type = response.content_type().map(str::to_owned);
        let body = response
            .body
            .collect()
            .await
            .map_err(|e| S3Error::Body(e.to_string()))?
            .into_bytes();

        debug!(bucket, key, size = body.len(), content_type = ?content_type, "Downloaded object");

        Ok(ObjectData { body, content_type })
    }

    /// Upload an object, overwriting any existing object at the same key
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: Option<String>,
    ) -> Result<(), S3Error> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .set_content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| S3Error::Request(DisplayErrorContext(&e).to_string()))?;

        debug!(bucket, key, size, "Uploaded object");
        Ok(())
    }
}
