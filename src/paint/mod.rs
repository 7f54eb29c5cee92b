//! Style values for the grid: colors and per-tier stroke/fill attributes.

mod color;
mod style;

pub use color::{Color, ColorParseError};
pub use style::{AxisStyle, PointStyle, StyleConfig};
