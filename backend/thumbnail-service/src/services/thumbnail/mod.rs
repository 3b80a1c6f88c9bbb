//! Thumbnail generation service
//!
//! - Key derivation for source and destination objects
//! - Image processor for decoding, resizing and re-encoding
//! - Service driving the per-entry fetch/transform/store flow

pub mod keys;
pub mod processor;
pub mod service;

pub use keys::{decode_source_key, destination_key, THUMBNAIL_KEY_PREFIX};
pub use processor::{
    ProcessorError, ThumbnailProcessor, ThumbnailResult, THUMBNAIL_MAX_DIMENSION,
};
pub use service::ThumbnailService;
