use crate::domain::entities::{ImageRecord, ImageUpload, NewImageRecord};
use crate::domain::errors::{TransformError, TransformResult};
use crate::domain::ports::image_repository::ImageRepository;
use crate::domain::ports::transform_client::TransformClient;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Relays uploads to the model server and records the produced image URL.
///
/// The remote call and the insert are not transactional. A transformation is
/// performed at least once per call, and at most one record is written: if
/// the insert fails after a successful remote call the produced image is
/// left unrecorded and the error is returned to the caller.
#[derive(Clone)]
pub struct TransformationService {
    client: Arc<dyn TransformClient>,
    image_repo: Arc<dyn ImageRepository>,
}

impl TransformationService {
    pub fn new(client: Arc<dyn TransformClient>, image_repo: Arc<dyn ImageRepository>) -> Self {
        Self { client, image_repo }
    }

    /// Transform an uploaded image for `user_id` and return the produced URL.
    ///
    /// The stream is read to completion before any request is made and is
    /// dropped when this call returns, on success or failure.
    pub async fn transform_image<R>(
        &self,
        user_id: i64,
        mut image: R,
        filename: Option<String>,
    ) -> TransformResult<String>
    where
        R: AsyncRead + Unpin + Send,
    {
        let result = async {
            let mut bytes = Vec::new();
            image.read_to_end(&mut bytes).await?;

            let response = self
                .client
                .transfer(ImageUpload { bytes, filename })
                .await?;
            let image_url = response.into_image_url()?;

            let record = self
                .image_repo
                .save_image(&NewImageRecord::new(user_id, image_url.clone()))
                .await?;

            tracing::info!(
                "Stored transformed image {} for user {}",
                record.id,
                user_id
            );

            Ok::<_, TransformError>(image_url)
        }
        .await;

        match &result {
            Ok(_) => {
                metrics::counter!("image_transformations_total", "outcome" => "success")
                    .increment(1);
            }
            Err(e) => {
                tracing::warn!("Image transformation for user {} failed: {}", user_id, e);
                metrics::counter!("image_transformations_total", "outcome" => e.kind())
                    .increment(1);
            }
        }

        result
    }

    /// All images recorded for a user, newest first
    pub async fn list_user_images(&self, user_id: i64) -> TransformResult<Vec<ImageRecord>> {
        Ok(self.image_repo.get_images_by_user(user_id).await?)
    }
}
