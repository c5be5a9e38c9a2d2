use crate::application::services::TransformationService;

#[derive(Clone)]
pub struct AppState {
    pub transformation_service: TransformationService,
}
