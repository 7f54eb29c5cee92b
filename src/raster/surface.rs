use bytemuck::{Pod, Zeroable};

use crate::coords::{CanvasSize, Vec2};
use crate::geometry::{AxisData, LineSegment};
use crate::paint::Color;
use crate::text::GlyphSource;

/// One straight-alpha RGBA pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Offscreen RGBA8 raster surface for the grid.
///
/// Dimensions are the ceiling of the logical canvas size; the rotation
/// center is the drawing origin, so a segment endpoint `(x, y)` lands at
/// surface position `center + (x, y)`.
pub struct RasterSurface {
    width: u32,
    height: u32,
    center: Vec2,
    pixels: Vec<Rgba8>,
}

impl RasterSurface {
    pub fn new(size: CanvasSize) -> Self {
        let (width, height) = size.surface_dims();
        Self {
            width,
            height,
            center: size.center(),
            pixels: vec![Rgba8::default(); (width * height) as usize],
        }
    }

    #[inline]
    pub fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// The pixel buffer as raw bytes: `width × height × 4`, row-major from
    /// the top-left.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgba8::default());
    }

    /// Draws one tier: every segment with the tier's stroke attributes, then
    /// every label (center-aligned, top baseline) in the tier's fill color.
    pub fn draw_axis<F: GlyphSource>(&mut self, data: &AxisData, font: &F, font_size: f32) {
        for seg in &data.segments {
            self.stroke_segment(seg, data.axis_style.line_width, data.axis_style.stroke_color);
        }
        for label in &data.labels {
            self.draw_label(&label.text, label.x, label.y, font, font_size, data.point_style.fill_color);
        }
    }

    // ── strokes ───────────────────────────────────────────────────────────

    fn stroke_segment(&mut self, seg: &LineSegment, width: f32, color: Color) {
        let x0 = self.center.x + seg.x0;
        let y0 = self.center.y + seg.y0;
        let x1 = self.center.x + seg.x1;
        let y1 = self.center.y + seg.y1;

        if x0 == x1 {
            self.stroke_vertical(x0, y0.min(y1), y0.max(y1), width, color);
        } else if y0 == y1 {
            self.stroke_horizontal(y0, x0.min(x1), x0.max(x1), width, color);
        } else {
            // Grid geometry is axis-aligned; oblique input still renders,
            // just without coverage weighting.
            self.stroke_oblique(x0, y0, x1, y1, width, color);
        }
    }

    /// Vertical stroke centered on column `x`, coverage-weighted so
    /// fractional widths (the 0.7× minor tier) render as partial alpha.
    fn stroke_vertical(&mut self, x: f32, y_min: f32, y_max: f32, width: f32, color: Color) {
        let half = width / 2.0;
        let span0 = x - half;
        let span1 = x + half;
        let row0 = y_min.floor().max(0.0) as i64;
        let row1 = (y_max.ceil() as i64).min(self.height as i64);

        for col in span0.floor() as i64..span1.ceil() as i64 {
            let cov = ((col as f32 + 1.0).min(span1) - (col as f32).max(span0)).clamp(0.0, 1.0);
            if cov <= 0.0 {
                continue;
            }
            let c = color.with_alpha_scaled(cov);
            for row in row0..row1 {
                self.blend_pixel(col, row, c);
            }
        }
    }

    fn stroke_horizontal(&mut self, y: f32, x_min: f32, x_max: f32, width: f32, color: Color) {
        let half = width / 2.0;
        let span0 = y - half;
        let span1 = y + half;
        let col0 = x_min.floor().max(0.0) as i64;
        let col1 = (x_max.ceil() as i64).min(self.width as i64);

        for row in span0.floor() as i64..span1.ceil() as i64 {
            let cov = ((row as f32 + 1.0).min(span1) - (row as f32).max(span0)).clamp(0.0, 1.0);
            if cov <= 0.0 {
                continue;
            }
            let c = color.with_alpha_scaled(cov);
            for col in col0..col1 {
                self.blend_pixel(col, row, c);
            }
        }
    }

    fn stroke_oblique(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 0.0 {
            return;
        }
        let r = (width / 2.0).max(0.5);
        let steps = len.ceil() as i64;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let cx = x0 + dx * t;
            let cy = y0 + dy * t;
            for row in (cy - r).floor() as i64..(cy + r).ceil() as i64 {
                for col in (cx - r).floor() as i64..(cx + r).ceil() as i64 {
                    self.write_pixel(col, row, color);
                }
            }
        }
    }

    // ── labels ────────────────────────────────────────────────────────────

    fn draw_label<F: GlyphSource>(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &F,
        font_size: f32,
        color: Color,
    ) {
        let anchor = self.center + Vec2::new(x, y);
        // Center-aligned, top baseline: the layout pen starts half the
        // advance width to the left of the anchor.
        let origin = anchor - Vec2::new(font.measure(text, font_size) / 2.0, 0.0);

        for glyph in font.layout(text, font_size, origin.x, origin.y) {
            let (metrics, bitmap) = font.rasterize(glyph.key);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }
            self.blit_coverage(
                glyph.x.round() as i64,
                glyph.y.round() as i64,
                metrics.width,
                metrics.height,
                &bitmap,
                color,
            );
        }
    }

    /// Blits an 8-bit coverage bitmap (a rasterized glyph) in `color`.
    fn blit_coverage(&mut self, x: i64, y: i64, w: usize, h: usize, coverage: &[u8], color: Color) {
        for gy in 0..h {
            for gx in 0..w {
                let cov = coverage[gy * w + gx];
                if cov == 0 {
                    continue;
                }
                self.blend_pixel(
                    x + gx as i64,
                    y + gy as i64,
                    color.with_alpha_scaled(cov as f32 / 255.0),
                );
            }
        }
    }

    // ── pixel access ──────────────────────────────────────────────────────

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some((y as u32 * self.width + x as u32) as usize)
        }
    }

    /// Source-over blend in straight alpha.
    fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        let Some(idx) = self.index(x, y) else { return };
        let sa = color.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }

        let dst = self.pixels[idx];
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }

        let blend = |src: f32, d: u8| {
            let d = d as f32 / 255.0;
            let c = (src * sa + d * da * (1.0 - sa)) / out_a;
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        };

        self.pixels[idx] = Rgba8 {
            r: blend(color.r, dst.r),
            g: blend(color.g, dst.g),
            b: blend(color.b, dst.b),
            a: (out_a.clamp(0.0, 1.0) * 255.0).round() as u8,
        };
    }

    fn write_pixel(&mut self, x: i64, y: i64, color: Color) {
        let Some(idx) = self.index(x, y) else { return };
        let [r, g, b, a] = color.to_rgba8();
        self.pixels[idx] = Rgba8 { r, g, b, a };
    }
}
