use crate::utils::{clamp, safe_div};

use super::layout::ChartDimensions;

/// A value range padded for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

/// Min/max of `values`, padded on both ends by 10% of the range, or by 1
/// unit for a flat series so a single-value chart still has vertical room.
pub fn padded_extent(values: &[f64]) -> Option<Extent> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = match (max - min) * 0.1 {
        p if p > 0.0 => p,
        _ => 1.0,
    };
    Some(Extent {
        min: min - pad,
        max: max + pad,
    })
}

/// Horizontal position of point `i` among `count` evenly spaced points.
///
/// A lone point sits at the surface midpoint rather than the left edge.
pub fn x_position(i: usize, count: usize, dims: &ChartDimensions) -> f64 {
    if count <= 1 {
        return dims.width * 0.5;
    }
    let t = i as f64 / (count - 1) as f64;
    dims.padding.left + t * dims.plot_width()
}

/// Vertical position of `value` within `extent`, top-down SVG coordinates.
pub fn y_position(value: f64, extent: Extent, dims: &ChartDimensions) -> f64 {
    let t = safe_div(value - extent.min, extent.max - extent.min).unwrap_or(0.5);
    dims.padding.top + (1.0 - t) * dims.plot_height()
}

/// SVG path for a line series: first point a move, the rest line segments.
///
/// Coordinates are rounded to one decimal to keep the attribute compact.
pub fn line_path(coords: &[(f64, f64)]) -> String {
    coords
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar rectangle geometry for slot `i` of `count`.
///
/// Height is scaled against `max_value` and clamped to the configured
/// minimum so empty-looking months remain visible and clickable.
pub fn bar_rect(value: f64, i: usize, count: usize, max_value: f64, dims: &ChartDimensions) -> Rect {
    let slot = dims.plot_width() / count as f64;
    let width = (slot - dims.bar_gap).max(1.0);
    let x = dims.padding.left + i as f64 * slot + dims.bar_gap * 0.5;
    let scaled = safe_div(value, max_value).unwrap_or(0.0) * dims.plot_height();
    let height = clamp(scaled, dims.min_bar_height, dims.plot_height());
    let y = dims.padding.top + (dims.plot_height() - height);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// An axis-aligned rectangle in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Which point indices get axis labels.
///
/// Up to four points every point is labeled; past that only the endpoints
/// and two interior points near the 33rd and 66th percentile positions,
/// deduplicated, so long series keep legible axes.
pub fn tick_indices(count: usize) -> Vec<usize> {
    if count <= 4 {
        return (0..count).collect();
    }
    let last = count - 1;
    let q1 = (last as f64 * 0.33).round() as usize;
    let q2 = (last as f64 * 0.66).round() as usize;
    let mut ticks = vec![0, q1, q2, last];
    ticks.sort_unstable();
    ticks.dedup();
    ticks
}

/// Index of the data point nearest to `pointer_x`, by horizontal distance.
///
/// Linear scan; series at this layer are at most a few dozen points.
pub fn nearest_index(pointer_x: f64, xs: &[f64]) -> Option<usize> {
    xs.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = (*a - pointer_x).abs();
            let db = (*b - pointer_x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}
