//! Lambda entry point

use crate::models::{ProcessResponse, S3Event};
use crate::services::storage::ObjectStore;
use crate::services::thumbnail::ThumbnailService;
use lambda_runtime::{Error, LambdaEvent};
use tracing::info;

/// Handle one S3 notification invocation.
///
/// Any error is returned to the runtime, which reports the invocation as
/// failed; retries are left to the platform.
pub async fn function_handler<S: ObjectStore>(
    event: LambdaEvent<S3Event>,
    service: &ThumbnailService<S>,
) -> Result<ProcessResponse, Error> {
    let (payload, context) = event.into_parts();
    info!(
        request_id = %context.request_id,
        records = payload.records.len(),
        "Received S3 notification"
    );

    Ok(service.process(&payload).await?)
}
