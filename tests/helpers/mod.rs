#![allow(dead_code)]
pub mod model_server;
pub mod test_db;

pub use model_server::*;
pub use test_db::*;
