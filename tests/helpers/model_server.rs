use modelapi::config::ModelServerUrl;
use modelapi::domain::ports::image_repository::ImageRepository;
use modelapi::domain::ports::transform_client::TransformClient;
use modelapi::infrastructure::persistence::Database;
use modelapi::infrastructure::providers::HttpTransformClient;
use modelapi::TransformationService;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a model server that answers every transfer with `status` and `body`.
pub async fn start_model_server(status: u16, body: Option<Value>) -> MockServer {
    let server = MockServer::start().await;

    let mut response = ResponseTemplate::new(status);
    if let Some(body) = body {
        response = response.set_body_json(body);
    }

    Mock::given(method("POST"))
        .and(path("/model/transfer/"))
        .respond_with(response)
        .mount(&server)
        .await;

    server
}

pub fn transformation_service(server: &MockServer, db: &Database) -> TransformationService {
    let base = ModelServerUrl::parse(&server.uri()).expect("mock server uri");
    let client = HttpTransformClient::new(&base, Duration::from_secs(5)).expect("http client");

    TransformationService::new(
        Arc::new(client) as Arc<dyn TransformClient>,
        Arc::new(db.clone()) as Arc<dyn ImageRepository>,
    )
}
