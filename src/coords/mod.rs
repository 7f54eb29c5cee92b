//! Logical-pixel value types shared by the geometry builders and the
//! rasterizer.

mod size;
mod vec2;

pub use size::CanvasSize;
pub use vec2::Vec2;
