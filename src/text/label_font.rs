use std::fmt;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

/// Error returned by [`LabelFont::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// A glyph positioned by layout, ready to rasterize and blit.
#[derive(Debug, Copy, Clone)]
pub struct PlacedGlyph {
    pub key: GlyphRasterConfig,
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
}

/// What the rasterizer needs from a label typeface: measure a string, lay it
/// out, and turn a laid-out glyph into a coverage bitmap.
///
/// [`LabelFont`] is the production implementation; keeping the surface
/// behind this seam lets the skin's lifecycle run against any glyph source.
pub trait GlyphSource {
    /// Advance width of `text` at `px`, in pixels. Used for center alignment.
    fn measure(&self, text: &str, px: f32) -> f32;

    /// Lays out `text` at `px` with its top-left pen position at `(x, y)`
    /// (Y growing downward, matching the raster surface).
    fn layout(&self, text: &str, px: f32, x: f32, y: f32) -> Vec<PlacedGlyph>;

    /// Rasterizes one laid-out glyph to an 8-bit coverage bitmap.
    fn rasterize(&self, key: GlyphRasterConfig) -> (fontdue::Metrics, Vec<u8>);
}

/// The sans-serif face used for axis labels.
///
/// Fonts are immutable after loading; the host supplies the bytes once at
/// skin construction (typically a system sans-serif).
pub struct LabelFont {
    font: fontdue::Font,
}

impl LabelFont {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font })
    }
}

impl GlyphSource for LabelFont {
    fn measure(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|c| self.font.metrics(c, px).advance_width)
            .sum()
    }

    fn layout(&self, text: &str, px: f32, x: f32, y: f32) -> Vec<PlacedGlyph> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { x, y, ..LayoutSettings::default() });
        layout.append(&[&self.font], &TextStyle::new(text, px, 0));

        layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| PlacedGlyph {
                key: g.key,
                x: g.x,
                y: g.y,
                width: g.width,
                height: g.height,
            })
            .collect()
    }

    fn rasterize(&self, key: GlyphRasterConfig) -> (fontdue::Metrics, Vec<u8>) {
        self.font.rasterize_config(key)
    }
}
