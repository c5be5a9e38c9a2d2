use crate::domain::errors::TransformError;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    BadGateway(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            ApiError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<TransformError> for ApiError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Upload(e) => {
                // Streamed multipart fields surface body-limit errors wrapped in io::Error
                let multipart = e
                    .get_ref()
                    .and_then(|inner| inner.downcast_ref::<MultipartError>());
                match multipart {
                    Some(m) if m.status() == StatusCode::PAYLOAD_TOO_LARGE => upload_too_large(),
                    _ => ApiError::BadRequest(format!("Failed to read uploaded image: {}", e)),
                }
            }
            TransformError::Persistence(e) => {
                tracing::error!("Failed to store transformed image: {}", e);
                ApiError::Internal("Failed to store transformed image".to_string())
            }
            remote @ (TransformError::RemoteStatus(_)
            | TransformError::MissingBody
            | TransformError::EmptyOutput
            | TransformError::Transport(_)) => ApiError::BadGateway(remote.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return upload_too_large();
        }
        ApiError::BadRequest(format!("Invalid multipart body: {}", err))
    }
}

fn upload_too_large() -> ApiError {
    ApiError::PayloadTooLarge("Uploaded image exceeds the maximum allowed size".to_string())
}

pub type ApiResult<T> = Result<T, ApiError>;
