//! Thumbnail processor - generates thumbnails from original images
//!
//! Detects the source encoding from the content (falling back to the key's
//! extension for formats without a signature, such as TGA), shrinks the image to fit
//! within [`THUMBNAIL_MAX_DIMENSION`] while keeping its aspect ratio, and
//! re-encodes it in the detected format. Images that already fit are left
//! at their original size.
//!
//! Uses `spawn_blocking` for CPU-intensive operations to avoid blocking the async runtime.

use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Bound applied to both width and height
pub const THUMBNAIL_MAX_DIMENSION: u32 = 300;

/// Errors from thumbnail generation; the caller attaches the object key
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Encode(String),

    #[error("Thumbnail task panicked: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, ProcessorError>;

/// Result of thumbnail generation
#[derive(Debug)]
pub struct ThumbnailResult {
    /// Encoded thumbnail, same format as the source
    pub data: Bytes,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Thumbnail processor
pub struct ThumbnailProcessor {
    max_dimension: u32,
}

impl Default for ThumbnailProcessor {
    fn default() -> Self {
        Self {
            max_dimension: THUMBNAIL_MAX_DIMENSION,
        }
    }
}

impl ThumbnailProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a thumbnail from the given image data (blocking version)
    ///
    /// `name` is only consulted when the content carries no recognizable
    /// signature.
    ///
    /// **Note:** This method performs CPU-intensive operations and should not be called
    /// directly from async code. Use `generate_async` instead.
    pub fn generate(&self, original_data: &[u8], name: &str) -> Result<ThumbnailResult> {
        let format = detect_format(original_data, name)?;

        let img = image::load_from_memory_with_format(original_data, format).map_err(|e| {
            ProcessorError::Decode(format!("Failed to decode {format:?} image: {e}"))
        })?;

        let (orig_w, orig_h) = img.dimensions();
        debug!(
            original_width = orig_w,
            original_height = orig_h,
            ?format,
            "Processing image for thumbnail"
        );

        let img = self.fit_within_box(img);
        let (width, height) = img.dimensions();
        let data = encode(&img, format)?;

        debug!(width, height, size = data.len(), "Thumbnail generated");

        Ok(ThumbnailResult {
            data,
            format,
            width,
            height,
        })
    }

    /// Generate a thumbnail asynchronously using a blocking thread pool
    pub async fn generate_async(
        self: Arc<Self>,
        original_data: Bytes,
        name: String,
    ) -> Result<ThumbnailResult> {
        tokio::task::spawn_blocking(move || self.generate(&original_data, &name))
            .await
            .map_err(|e| ProcessorError::Task(e.to_string()))?
    }

    /// Shrink the image so neither side exceeds the bound; never enlarges
    pub fn fit_within_box(&self, img: DynamicImage) -> DynamicImage {
        let (w, h) = img.dimensions();
        if w <= self.max_dimension && h <= self.max_dimension {
            return img;
        }

        let (new_w, new_h) = self.calculate_dimensions(w, h);
        img.resize_exact(new_w, new_h, FilterType::Lanczos3)
    }

    /// Calculate new dimensions maintaining aspect ratio, longer side at the bound
    fn calculate_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let max_dim = self.max_dimension;

        if width >= height {
            let ratio = f64::from(max_dim) / f64::from(width);
            (max_dim, scaled(height, ratio))
        } else {
            let ratio = f64::from(max_dim) / f64::from(height);
            (scaled(width, ratio), max_dim)
        }
    }
}

/// Sniff the content first; only signature-less formats fall back to the extension
fn detect_format(data: &[u8], name: &str) -> Result<ImageFormat> {
    match image::guess_format(data) {
        Ok(format) => Ok(format),
        Err(sniff_err) => match ImageFormat::from_path(name) {
            Ok(ImageFormat::Tga) => Ok(ImageFormat::Tga),
            _ => Err(ProcessorError::Decode(format!(
                "Unrecognized image encoding: {sniff_err}"
            ))),
        },
    }
}

fn scaled(side: u32, ratio: f64) -> u32 {
    ((f64::from(side) * ratio).round() as u32).max(1)
}

fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Bytes> {
    let mut cursor = Cursor::new(Vec::new());

    img.write_to(&mut cursor, format)
        .map_err(|e| ProcessorError::Encode(format!("Failed to encode {format:?}: {e}")))?;

    Ok(Bytes::from(cursor.into_inner()))
}
