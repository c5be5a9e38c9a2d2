use crate::domain::entities::{ImageRecord, NewImageRecord};
use crate::domain::ports::image_repository::ImageRepository;
use crate::infrastructure::persistence::Database;
use sqlx::{any::AnyRow, Row};

fn image_from_row(row: &AnyRow) -> Result<ImageRecord, sqlx::Error> {
    Ok(ImageRecord {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        image_uri: row.try_get("image_uri")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait::async_trait]
impl ImageRepository for Database {
    async fn save_image(&self, image: &NewImageRecord) -> Result<ImageRecord, sqlx::Error> {
        // fetch_all steps the statement to completion so the insert commits
        // before returning; fetch_one leaves SQLite mid-statement
        let rows = sqlx::query(
            "INSERT INTO images (user_id, image_uri, created_at)
             VALUES (?, ?, ?)
             RETURNING id, user_id, image_uri, created_at",
        )
        .bind(image.user_id)
        .bind(&image.image_uri)
        .bind(&image.created_at)
        .fetch_all(&self.pool)
        .await?;

        let row = rows.first().ok_or(sqlx::Error::RowNotFound)?;
        image_from_row(row)
    }

    async fn get_images_by_user(&self, user_id: i64) -> Result<Vec<ImageRecord>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, user_id, image_uri, created_at
             FROM images
             WHERE user_id = ?
             ORDER BY id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(image_from_row).collect()
    }
}
