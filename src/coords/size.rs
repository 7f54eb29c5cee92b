use super::Vec2;

/// Logical stage size in logical pixels.
///
/// Invariant:
/// - components are non-negative; the host is responsible for never handing
///   in negative or non-finite dimensions.
///
/// The raster surface is always `ceil(width) × ceil(height)` integral pixels,
/// and the default rotation center sits at the geometric center so the grid
/// origin (0, 0) lands mid-stage regardless of surface coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Integral raster-surface dimensions (ceiling-rounded).
    #[inline]
    pub fn surface_dims(self) -> (u32, u32) {
        (self.width.ceil() as u32, self.height.ceil() as u32)
    }

    /// Default rotation center: the stage midpoint.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
