//! Stagegrid: a coordinate-grid overlay texture for a 2D stage renderer.
//!
//! The host engine displays a ruler-like "grid" layer: the X/Y axes, major
//! gridlines every 100 logical pixels with numeric labels, and minor
//! gridlines every 20. Re-deriving that geometry every frame is wasteful, so
//! this crate rasterizes the grid once into an offscreen RGBA8 surface,
//! uploads it as a GPU texture, and hands the same texture back until a
//! geometry-affecting change (size, style, font size) marks it dirty.
//!
//! [`skin::GridSkin`] is the public façade; the pieces underneath are
//! [`geometry`] (pure tier builders), [`raster`] (the offscreen surface) and
//! [`texture`] (the dirty-flag cache over a [`texture::TextureBackend`]).

pub mod coords;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod skin;
pub mod text;
pub mod texture;

pub use skin::{GridSkin, Skin};
