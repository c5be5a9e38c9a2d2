use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    let images: Router<AppState> = Router::new()
        .route(
            "/api/users/:user_id/images/transform",
            post(controllers::images::transform_image),
        )
        .route(
            "/api/users/:user_id/images",
            get(controllers::images::list_user_images),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    Router::new()
        .route("/health", get(controllers::health::health))
        .merge(images)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
