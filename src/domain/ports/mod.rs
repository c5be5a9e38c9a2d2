pub mod image_repository;
pub mod transform_client;
