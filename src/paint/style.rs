use super::Color;

/// Stroke attributes for one grid tier's lines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisStyle {
    pub line_width: f32,
    pub stroke_color: Color,
}

impl AxisStyle {
    /// Returns a copy with the line width multiplied by `factor`.
    ///
    /// Tier variants (main axis ×2, minor grid ×0.7) are derived as new
    /// values; the shared [`StyleConfig`] is never mutated in place.
    #[inline]
    pub fn scaled_width(self, factor: f32) -> Self {
        Self { line_width: self.line_width * factor, ..self }
    }
}

/// Fill attributes for the axis labels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointStyle {
    pub fill_color: Color,
}

/// Immutable grid style, shared by all tiers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleConfig {
    pub axis: AxisStyle,
    pub point: PointStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        // Stock ruler gray.
        let gray = Color::from_rgba8(0xd8, 0xd8, 0xd9, 0xff);
        Self {
            axis: AxisStyle { line_width: 1.0, stroke_color: gray },
            point: PointStyle { fill_color: gray },
        }
    }
}
