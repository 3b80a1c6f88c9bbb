pub mod notification;

pub use notification::{Entry, ProcessResponse, S3Event, S3EventRecord};
