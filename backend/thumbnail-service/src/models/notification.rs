//! S3 event notification payload and invocation response

use serde::{Deserialize, Serialize};

/// S3 event notification as delivered to the function
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3EventRecord {
    #[serde(rename = "eventName", default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Object {
    /// Percent-encoded key, `+` standing for space
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// One newly stored source object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub source_bucket: String,
    /// Still encoded as received
    pub source_key: String,
}

impl Entry {
    pub fn new(source_bucket: impl Into<String>, source_key: impl Into<String>) -> Self {
        Self {
            source_bucket: source_bucket.into(),
            source_key: source_key.into(),
        }
    }
}

impl S3EventRecord {
    /// Build an `ObjectCreated:Put` record
    pub fn object_created(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            event_name: Some("ObjectCreated:Put".to_string()),
            s3: S3Entity {
                bucket: S3Bucket { name: bucket.into() },
                object: S3Object {
                    key: key.into(),
                    size: None,
                },
            },
        }
    }

    pub fn entry(&self) -> Entry {
        Entry::new(self.s3.bucket.name.clone(), self.s3.object.key.clone())
    }
}

impl S3Event {
    pub fn new(records: Vec<S3EventRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<Entry> for S3Event {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|e| S3EventRecord::object_created(e.source_bucket, e.source_key))
                .collect(),
        )
    }
}

/// Terminal result of a fully successful invocation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProcessResponse {
    pub status: String,
}

impl ProcessResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EVENT: &str = r#"{
        "Records": [
            {
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2024-05-01T12:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": { "name": "photo-uploads", "arn": "arn:aws:s3:::photo-uploads" },
                    "object": { "key": "holiday/beach+day%281%29.jpg", "size": 48213, "eTag": "abc" }
                }
            },
            {
                "eventName": "ObjectCreated:CompleteMultipartUpload",
                "s3": {
                    "bucket": { "name": "photo-uploads" },
                    "object": { "key": "cat.png" }
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_s3_notification() {
        let event: S3Event = serde_json::from_str(SAMPLE_EVENT).unwrap();
        let entries: Vec<Entry> = event
            .records
            .iter()
            .map(S3EventRecord::entry)
            .collect();

        assert_eq!(
            entries,
            vec![
                Entry::new("photo-uploads", "holiday/beach+day%281%29.jpg"),
                Entry::new("photo-uploads", "cat.png"),
            ]
        );
        assert_eq!(event.records[0].s3.object.size, Some(48213));
        assert_eq!(event.records[1].s3.object.size, None);
    }

    #[test]
    fn test_missing_records_is_empty_event() {
        let event: S3Event = serde_json::from_str("{}").unwrap();
        assert!(event.records.is_empty());
    }

    #[test]
    fn test_success_response_shape() {
        let json = serde_json::to_value(ProcessResponse::success()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "success" }));
    }
}
