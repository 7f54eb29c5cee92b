//! Label font loading and layout.

mod label_font;

#[cfg(test)]
pub(crate) mod testutil;

pub use label_font::{FontLoadError, GlyphSource, LabelFont, PlacedGlyph};
