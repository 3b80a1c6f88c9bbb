use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;
use thumbnail_service::services::storage::{FetchedObject, ObjectStore, StorageError};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: Option<String>,
}

/// Object store backed by a map, recording every call
#[derive(Default)]
pub struct InMemoryStore {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    gets: Mutex<Vec<(String, String)>>,
    puts: Mutex<Vec<(String, String)>>,
    fail_puts: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_puts() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, bucket: &str, key: &str, body: Bytes, content_type: Option<&str>) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: content_type.map(str::to_string),
            },
        );
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn gets(&self) -> Vec<(String, String)> {
        self.gets.lock().unwrap().clone()
    }

    pub fn puts(&self) -> Vec<(String, String)> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<FetchedObject, StorageError> {
        self.gets
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));

        let object = self.object(bucket, key).ok_or(StorageError::NotFound)?;
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
        if self.fail_puts {
            return Err(StorageError::Backend("SlowDown".to_string()));
        }

        self.puts
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject { body, content_type },
        );
        Ok(())
    }
}

/// Encode a gradient image of the given size
pub fn image_bytes(width: u32, height: u32, format: ImageFormat) -> Bytes {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let img = match format {
        ImageFormat::Gif => DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(img).to_rgba8()),
        _ => DynamicImage::ImageRgb8(img),
    };

    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, format).unwrap();
    Bytes::from(cursor.into_inner())
}
