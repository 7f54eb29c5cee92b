use std::fmt;

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Straight-alpha RGBA color.
///
/// The rasterizer blends in straight alpha and reads pixels back the way a
/// 2D canvas does, so unlike a GPU compositing path there is no
/// premultiplication here; conversion to bytes happens once per pixel write.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from `0`–`255` components.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parses a CSS-style `#rrggbb` or `#rrggbbaa` hex literal.
    ///
    /// This is the constructor for colors coming from host style strings
    /// (the default grid color is `#d8d8d9`).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(ColorParseError(hex.to_string()));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError(hex.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(ColorParseError(hex.to_string())),
        }
    }

    /// Returns the color as straight RGBA bytes.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Returns the same color with alpha scaled by `factor`.
    ///
    /// Used for coverage-weighted strokes of fractional-width lines.
    #[inline]
    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        Self { a: self.a * factor.clamp(0.0, 1.0), ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_hex() {
        let c = Color::from_hex("#d8d8d9").unwrap();
        assert_eq!(c.to_rgba8(), [0xd8, 0xd8, 0xd9, 0xff]);
    }

    #[test]
    fn parses_rgba_hex_without_hash() {
        let c = Color::from_hex("00ff0080").unwrap();
        assert_eq!(c.to_rgba8(), [0x00, 0xff, 0x00, 0x80]);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#abc").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn alpha_scaling_clamps_factor() {
        let c = Color::new(1.0, 1.0, 1.0, 1.0).with_alpha_scaled(2.0);
        assert_eq!(c.a, 1.0);
    }
}
