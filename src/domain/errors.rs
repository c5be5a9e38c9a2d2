use thiserror::Error;

/// Failures of a single image transformation.
///
/// Upload and persistence failures are carried through untouched; the
/// remaining variants describe what the model server returned.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Failed to transform image: {0}")]
    RemoteStatus(reqwest::StatusCode),
    #[error("Failed to transform image: body is null")]
    MissingBody,
    #[error("Failed to transform image: output is empty or null")]
    EmptyOutput,
    #[error("Failed to reach model server: {0}")]
    Transport(#[source] reqwest::Error),
    #[error(transparent)]
    Upload(#[from] std::io::Error),
    #[error(transparent)]
    Persistence(#[from] sqlx::Error),
}

impl TransformError {
    /// Label used for the outcome metric.
    pub fn kind(&self) -> &'static str {
        match self {
            TransformError::RemoteStatus(_) => "remote_status",
            TransformError::MissingBody => "missing_body",
            TransformError::EmptyOutput => "empty_output",
            TransformError::Transport(_) => "transport",
            TransformError::Upload(_) => "upload",
            TransformError::Persistence(_) => "persistence",
        }
    }
}

pub type TransformResult<T> = Result<T, TransformError>;
