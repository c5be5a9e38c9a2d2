use crate::domain::entities::ImageRecord;
use crate::infrastructure::http::middleware::{ApiError, ApiResult, AppState};
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use futures::TryStreamExt;
use serde::Serialize;
use std::io;
use tokio_util::io::StreamReader;

/// Name of the multipart field holding the image
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct TransformImageResponse {
    pub image_url: String,
}

/// POST /api/users/:user_id/images/transform - Transform an uploaded image
///
/// The `file` field is streamed straight into the transformation service;
/// other fields are skipped.
pub async fn transform_image(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    mut multipart: Multipart,
) -> ApiResult<Json<TransformImageResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let reader = StreamReader::new(
            field.map_err(|e| io::Error::new(io::ErrorKind::Other, e)),
        );

        let image_url = state
            .transformation_service
            .transform_image(user_id, Box::pin(reader), filename)
            .await?;

        return Ok(Json(TransformImageResponse { image_url }));
    }

    Err(ApiError::BadRequest(format!(
        "Multipart field '{}' is required",
        FILE_FIELD
    )))
}

/// GET /api/users/:user_id/images - List a user's transformed images
pub async fn list_user_images(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<ImageRecord>>> {
    let images = state
        .transformation_service
        .list_user_images(user_id)
        .await?;

    Ok(Json(images))
}
