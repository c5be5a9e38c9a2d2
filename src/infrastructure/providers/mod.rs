pub mod model_server_client;

pub use model_server_client::*;
