use crate::domain::entities::{ImageUpload, TransformResponse};
use crate::domain::errors::TransformResult;

/// One call to the model server's transfer endpoint.
///
/// Implementations make exactly one network attempt and fail on any non-2xx
/// status or on a body that does not match [`TransformResponse`].
#[async_trait::async_trait]
pub trait TransformClient: Send + Sync {
    async fn transfer(&self, upload: ImageUpload) -> TransformResult<TransformResponse>;
}
