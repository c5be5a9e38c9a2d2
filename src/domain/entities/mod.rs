pub mod image;
pub mod transform;

pub use image::*;
pub use transform::*;
