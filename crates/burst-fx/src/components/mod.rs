pub mod image;
pub mod tint;
