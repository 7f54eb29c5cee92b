use fontdue::layout::GlyphRasterConfig;

use super::{GlyphSource, LabelFont, PlacedGlyph};

/// Glyph source that lays out nothing.
///
/// Lifecycle tests exercise the skin's dirty/dispose behavior without
/// depending on any font being installed; label ink is covered separately by
/// the [`system_font`]-backed tests.
pub(crate) struct NoGlyphs;

impl GlyphSource for NoGlyphs {
    fn measure(&self, _text: &str, _px: f32) -> f32 {
        0.0
    }

    fn layout(&self, _text: &str, _px: f32, _x: f32, _y: f32) -> Vec<PlacedGlyph> {
        Vec::new()
    }

    fn rasterize(&self, _key: GlyphRasterConfig) -> (fontdue::Metrics, Vec<u8>) {
        unreachable!("layout yields no glyphs")
    }
}

/// Probes well-known system font paths for a sans-serif face.
///
/// Label-drawing tests skip themselves when no system font is installed
/// rather than shipping font bytes with the crate.
pub(crate) fn system_font() -> Option<LabelFont> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .and_then(|bytes| LabelFont::from_bytes(&bytes).ok())
}
