use crate::domain::errors::TransformError;
use serde::Deserialize;

/// Image bytes as sent to the model server in the `file` part.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub filename: Option<String>,
}

/// Response body of `POST /model/transfer/`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TransformResponse {
    pub output: Option<Vec<String>>,
}

impl TransformResponse {
    /// Takes the first produced URL. Remaining candidates are discarded.
    pub fn into_image_url(self) -> Result<String, TransformError> {
        self.output
            .and_then(|output| output.into_iter().next())
            .ok_or(TransformError::EmptyOutput)
    }
}
