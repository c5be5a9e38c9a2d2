use crate::config::ModelServerUrl;
use crate::domain::entities::{ImageUpload, TransformResponse};
use crate::domain::errors::{TransformError, TransformResult};
use crate::domain::ports::transform_client::TransformClient;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const TRANSFORM_IMAGE_ENDPOINT: &str = "/model/transfer/";

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// HTTP client for the model server's transfer endpoint
#[derive(Clone)]
pub struct HttpTransformClient {
    http_client: Client,
    endpoint: String,
}

impl HttpTransformClient {
    pub fn new(base_url: &ModelServerUrl, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            endpoint: base_url.join(TRANSFORM_IMAGE_ENDPOINT),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(upload: ImageUpload) -> Form {
        let mut part = Part::bytes(upload.bytes);
        if let Some(filename) = upload.filename {
            part = part.file_name(filename);
        }
        Form::new().part(FILE_FIELD, part)
    }
}

#[async_trait]
impl TransformClient for HttpTransformClient {
    async fn transfer(&self, upload: ImageUpload) -> TransformResult<TransformResponse> {
        info!(
            "Sending image to model server at {} ({} bytes, filename: {:?})",
            self.endpoint,
            upload.bytes.len(),
            upload.filename
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .multipart(Self::build_form(upload))
            .send()
            .await
            .map_err(|e| {
                warn!("Model server request to {} failed: {}", self.endpoint, e);
                TransformError::Transport(e)
            })?;

        let status = response.status();
        info!("Model server returned status {}", status.as_u16());

        if !status.is_success() {
            return Err(TransformError::RemoteStatus(status));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read model server response body: {}", e);
            TransformError::MissingBody
        })?;

        match serde_json::from_slice::<Option<TransformResponse>>(&body) {
            Ok(Some(parsed)) => Ok(parsed),
            Ok(None) => Err(TransformError::MissingBody),
            Err(e) => {
                debug!("Model server body did not match the expected shape: {}", e);
                Err(TransformError::MissingBody)
            }
        }
    }
}
