pub mod transformation_service;

pub use transformation_service::*;
