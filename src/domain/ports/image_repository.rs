use crate::domain::entities::{ImageRecord, NewImageRecord};

#[async_trait::async_trait]
pub trait ImageRepository: Send + Sync {
    async fn save_image(&self, image: &NewImageRecord) -> Result<ImageRecord, sqlx::Error>;
    async fn get_images_by_user(&self, user_id: i64) -> Result<Vec<ImageRecord>, sqlx::Error>;
}
