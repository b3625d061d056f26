pub mod error;
pub mod image_bridge;
pub mod pixel;
