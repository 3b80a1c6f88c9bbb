//! Thumbnail Service
//!
//! Lambda function that reacts to S3 object-created notifications, shrinks
//! each new image to fit within 300x300 and writes it to the thumbnail bucket
//! as `thumb-<source key>`.

pub mod config;
pub mod error;
pub mod handler;
pub mod models;
pub mod services;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
