use crate::application::services::TransformationService;
use crate::config::Config;
use crate::domain::ports::image_repository::ImageRepository;
use crate::domain::ports::transform_client::TransformClient;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::providers::HttpTransformClient;
use std::sync::Arc;

pub fn build_app_state(
    db: Database,
    config: &Config,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let transform_client =
        HttpTransformClient::new(&config.model_server_url, config.model_server_timeout)?;
    tracing::info!(
        "Model server client initialized for {} (timeout {:?})",
        transform_client.endpoint(),
        config.model_server_timeout
    );

    let transformation_service = TransformationService::new(
        Arc::new(transform_client) as Arc<dyn TransformClient>,
        Arc::new(db) as Arc<dyn ImageRepository>,
    );
    tracing::info!("Transformation service initialized");

    Ok(AppState {
        transformation_service,
    })
}
