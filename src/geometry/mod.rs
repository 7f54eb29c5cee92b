//! Pure grid-geometry builders.
//!
//! Each tier of the grid (main axis, major grid, minor grid) is computed as
//! an [`AxisData`]: line segments and label points in offset-from-center
//! coordinates, paired with the stroke/fill attributes for that tier. The
//! builders are pure functions of the canvas size and style; the rasterizer
//! consumes their output without looking back at either.

mod builder;

pub use builder::{
    grid_axis, main_axis, AxisData, LabelPoint, LineSegment, MAJOR_INTERVAL, MINOR_INTERVAL,
};
