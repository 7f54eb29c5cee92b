use crate::coords::CanvasSize;
use crate::paint::{AxisStyle, PointStyle, StyleConfig};

/// Labeled gridline spacing in logical pixels.
pub const MAJOR_INTERVAL: f32 = 100.0;

/// Unlabeled fine-gridline spacing in logical pixels.
pub const MINOR_INTERVAL: f32 = 20.0;

const MAIN_WIDTH_FACTOR: f32 = 2.0;
const MINOR_WIDTH_FACTOR: f32 = 0.7;

/// A stroked line in offset-from-center coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

/// A numeric axis label anchored (center-aligned, top baseline) at an
/// offset-from-center point.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPoint {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// One tier's worth of drawing work: segments, labels, and the attributes
/// they are drawn with.
#[derive(Debug, Clone)]
pub struct AxisData {
    pub segments: Vec<LineSegment>,
    pub labels: Vec<LabelPoint>,
    pub axis_style: AxisStyle,
    pub point_style: PointStyle,
}

/// The X and Y axes themselves: two full-span segments through the origin
/// and a single "0" label, drawn at double line width.
pub fn main_axis(size: CanvasSize, style: &StyleConfig) -> AxisData {
    let max_x = size.width;
    let max_y = size.height;

    AxisData {
        segments: vec![
            LineSegment { x0: max_x, y0: 0.0, x1: -max_x, y1: 0.0 },
            LineSegment { x0: 0.0, y0: max_y, x1: 0.0, y1: -max_y },
        ],
        labels: vec![label(0.0, 0.0, 0.0)],
        axis_style: style.axis.scaled_width(MAIN_WIDTH_FACTOR),
        point_style: style.point,
    }
}

/// Gridlines at every multiple of `interval` strictly inside the canvas.
///
/// Vertical lines at `±k·interval` are labeled with the signed offset.
/// Horizontal lines carry the *opposite* sign: raster Y grows downward while
/// stage Y reads upward, so the line at raster `y = +k` is labeled `−k`.
///
/// With `with_labels == false` (the minor tier) no labels are emitted and the
/// line width drops to 0.7×. An interval at or beyond both canvas dimensions
/// yields an empty tier; a line exactly on the canvas edge is never emitted
/// (strict `<` bound).
pub fn grid_axis(
    size: CanvasSize,
    style: &StyleConfig,
    interval: f32,
    with_labels: bool,
) -> AxisData {
    let mut segments = Vec::new();
    let mut labels = Vec::new();

    let axis_style = if with_labels {
        style.axis
    } else {
        style.axis.scaled_width(MINOR_WIDTH_FACTOR)
    };

    if !(interval > 0.0) {
        log::warn!("grid_axis: ignoring non-positive interval {interval}");
        return AxisData { segments, labels, axis_style, point_style: style.point };
    }

    let max_x = size.width;
    let max_y = size.height;

    let mut step = interval;
    while step < max_x {
        segments.push(LineSegment { x0: step, y0: max_y, x1: step, y1: -max_y });
        segments.push(LineSegment { x0: -step, y0: max_y, x1: -step, y1: -max_y });
        labels.push(label(step, step, 0.0));
        labels.push(label(-step, -step, 0.0));
        step += interval;
    }

    let mut step = interval;
    while step < max_y {
        segments.push(LineSegment { x0: max_x, y0: step, x1: -max_x, y1: step });
        segments.push(LineSegment { x0: max_x, y0: -step, x1: -max_x, y1: -step });
        labels.push(label(-step, 0.0, step));
        labels.push(label(step, 0.0, -step));
        step += interval;
    }

    if !with_labels {
        labels.clear();
    }

    AxisData { segments, labels, axis_style, point_style: style.point }
}

fn label(value: f32, x: f32, y: f32) -> LabelPoint {
    // Whole offsets print as integers ("100", not "100.0").
    let text = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    };
    LabelPoint { text, x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: f32, h: f32) -> CanvasSize {
        CanvasSize::new(w, h)
    }

    fn style() -> StyleConfig {
        StyleConfig::default()
    }

    fn vertical_offsets(data: &AxisData) -> Vec<f32> {
        data.segments
            .iter()
            .filter(|s| s.x0 == s.x1)
            .map(|s| s.x0)
            .collect()
    }

    // ── main axis ─────────────────────────────────────────────────────────

    #[test]
    fn main_axis_spans_and_single_zero_label() {
        let data = main_axis(size(480.0, 360.0), &style());
        assert_eq!(data.segments.len(), 2);
        assert_eq!(data.segments[0], LineSegment { x0: 480.0, y0: 0.0, x1: -480.0, y1: 0.0 });
        assert_eq!(data.segments[1], LineSegment { x0: 0.0, y0: 360.0, x1: 0.0, y1: -360.0 });
        assert_eq!(data.labels, vec![LabelPoint { text: "0".into(), x: 0.0, y: 0.0 }]);
    }

    #[test]
    fn main_axis_doubles_line_width() {
        let data = main_axis(size(480.0, 360.0), &style());
        assert_eq!(data.axis_style.line_width, 2.0);
    }

    // ── major grid ────────────────────────────────────────────────────────

    #[test]
    fn major_grid_line_count_480() {
        // 100, 200, 300, 400 are < 480; 500 is excluded. Eight vertical
        // lines counting both signs.
        let data = grid_axis(size(480.0, 480.0), &style(), MAJOR_INTERVAL, true);
        let mut xs = vertical_offsets(&data);
        xs.sort_by(f32::total_cmp);
        assert_eq!(
            xs,
            vec![-400.0, -300.0, -200.0, -100.0, 100.0, 200.0, 300.0, 400.0]
        );
    }

    #[test]
    fn line_on_canvas_edge_is_excluded() {
        // 400 == width must not produce a line (strict less-than).
        let data = grid_axis(size(400.0, 50.0), &style(), MAJOR_INTERVAL, true);
        let xs = vertical_offsets(&data);
        assert_eq!(xs.len(), 6);
        assert!(xs.iter().all(|x| x.abs() < 400.0));
    }

    #[test]
    fn interval_beyond_canvas_yields_empty_tier() {
        let data = grid_axis(size(80.0, 60.0), &style(), MAJOR_INTERVAL, true);
        assert!(data.segments.is_empty());
        assert!(data.labels.is_empty());
    }

    #[test]
    fn x_labels_carry_line_sign() {
        let data = grid_axis(size(250.0, 10.0), &style(), MAJOR_INTERVAL, true);
        let on_x: Vec<_> = data.labels.iter().filter(|l| l.y == 0.0).collect();
        assert!(on_x.iter().any(|l| l.text == "100" && l.x == 100.0));
        assert!(on_x.iter().any(|l| l.text == "-100" && l.x == -100.0));
        assert!(on_x.iter().any(|l| l.text == "200" && l.x == 200.0));
        assert!(on_x.iter().any(|l| l.text == "-200" && l.x == -200.0));
    }

    #[test]
    fn y_labels_flip_sign() {
        // Raster Y grows down, stage Y reads up: the line at raster +100 is
        // labeled -100 and vice versa.
        let data = grid_axis(size(10.0, 250.0), &style(), MAJOR_INTERVAL, true);
        let on_y: Vec<_> = data.labels.iter().filter(|l| l.x == 0.0).collect();
        assert!(on_y.iter().any(|l| l.y == 100.0 && l.text == "-100"));
        assert!(on_y.iter().any(|l| l.y == -100.0 && l.text == "100"));
        assert!(on_y.iter().any(|l| l.y == 200.0 && l.text == "-200"));
        assert!(on_y.iter().any(|l| l.y == -200.0 && l.text == "200"));
    }

    #[test]
    fn end_to_end_480_360_label_positions() {
        let data = grid_axis(size(480.0, 360.0), &style(), MAJOR_INTERVAL, true);
        let mut xs: Vec<f32> = data.labels.iter().filter(|l| l.y == 0.0).map(|l| l.x).collect();
        xs.sort_by(f32::total_cmp);
        assert_eq!(xs, vec![-400.0, -300.0, -200.0, -100.0, 100.0, 200.0, 300.0, 400.0]);

        let mut ys: Vec<f32> = data.labels.iter().filter(|l| l.x == 0.0).map(|l| l.y).collect();
        ys.sort_by(f32::total_cmp);
        assert_eq!(ys, vec![-300.0, -200.0, -100.0, 100.0, 200.0, 300.0]);
    }

    // ── minor grid ────────────────────────────────────────────────────────

    #[test]
    fn minor_tier_never_labels() {
        for (w, h) in [(480.0, 360.0), (37.0, 991.0), (0.0, 0.0)] {
            let data = grid_axis(size(w, h), &style(), MINOR_INTERVAL, false);
            assert!(data.labels.is_empty(), "labels leaked for {w}x{h}");
        }
    }

    #[test]
    fn minor_tier_thins_line_width() {
        let data = grid_axis(size(480.0, 360.0), &style(), MINOR_INTERVAL, false);
        assert!((data.axis_style.line_width - 0.7).abs() < 1e-6);
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn non_positive_interval_is_empty_not_hung() {
        let data = grid_axis(size(480.0, 360.0), &style(), 0.0, true);
        assert!(data.segments.is_empty());
        let data = grid_axis(size(480.0, 360.0), &style(), -5.0, true);
        assert!(data.segments.is_empty());
    }
}
