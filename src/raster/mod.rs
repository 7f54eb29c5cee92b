//! Offscreen rasterization of grid geometry.
//!
//! The surface is a plain RGBA8 buffer (top-left origin, straight alpha)
//! anchored at a rotation center; all drawing coordinates are offsets from
//! that center. Tiers are drawn main → major → minor, later tiers painted
//! over earlier ones where they coincide. Nothing here can fail: a
//! zero-sized surface simply holds an empty buffer.

mod surface;

pub use surface::{RasterSurface, Rgba8};
