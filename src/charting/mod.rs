//! Chart-ready geometry for aggregated market series.
//!
//! Pure functions from a series and surface dimensions to renderable
//! geometry: an SVG-style path for line metrics, bar rectangles for
//! inventory counts, axis tick labels, and a nearest-point hit test for
//! tooltips. No drawing happens here; the render layer owns styling.

mod geometry;
mod layout;

pub use geometry::{nearest_index, padded_extent, tick_indices, Extent, Rect};
pub use layout::{ChartDimensions, Padding};

use crate::types::{AggregatedPoint, Metric, Reduction};
use crate::utils::month_label;

use geometry::{bar_rect, line_path, x_position, y_position};

/// A plotted observation, kept for markers and tooltip anchoring.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub month: String,
}

/// One bar of an inventory chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub rect: Rect,
    pub value: f64,
    pub month: String,
}

/// An axis label at a horizontal position.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub index: usize,
    pub x: f64,
    pub label: String,
}

/// Renderable geometry for one metric over one series.
///
/// Average metrics fill `path`/`points`; sum metrics fill `bars`. Either
/// way `ticks` carries the axis labels. Recomputed per render, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartGeometry {
    pub path: String,
    pub points: Vec<PlotPoint>,
    pub bars: Vec<Bar>,
    pub ticks: Vec<TickLabel>,
    pub extent: Option<Extent>,
}

/// Project `metric` over `series` onto plot coordinates.
///
/// Null observations are skipped, never drawn as zero: a line simply
/// connects the remaining points; a bar slot stays empty.
pub fn project(series: &[AggregatedPoint], metric: Metric, dims: &ChartDimensions) -> ChartGeometry {
    match metric.reduction() {
        Reduction::Average => project_line(series, metric, dims),
        Reduction::Sum => project_bars(series, metric, dims),
    }
}

fn project_line(
    series: &[AggregatedPoint],
    metric: Metric,
    dims: &ChartDimensions,
) -> ChartGeometry {
    let observed: Vec<(&AggregatedPoint, f64)> = series
        .iter()
        .filter_map(|p| metric.of_point(p).map(|v| (p, v)))
        .collect();
    let values: Vec<f64> = observed.iter().map(|(_, v)| *v).collect();
    let Some(extent) = padded_extent(&values) else {
        return ChartGeometry::default();
    };

    let count = observed.len();
    let points: Vec<PlotPoint> = observed
        .iter()
        .enumerate()
        .map(|(i, (point, value))| PlotPoint {
            x: x_position(i, count, dims),
            y: y_position(*value, extent, dims),
            value: *value,
            month: point.month.clone(),
        })
        .collect();
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    let months: Vec<&str> = observed.iter().map(|(p, _)| p.month.as_str()).collect();

    ChartGeometry {
        path: line_path(&coords),
        points,
        bars: Vec::new(),
        ticks: ticks_for(&months, dims),
        extent: Some(extent),
    }
}

fn project_bars(
    series: &[AggregatedPoint],
    metric: Metric,
    dims: &ChartDimensions,
) -> ChartGeometry {
    let count = series.len();
    if count == 0 {
        return ChartGeometry::default();
    }
    // Raw max sets the scale; floor of 1 keeps an all-zero month drawable.
    let max_value = series
        .iter()
        .filter_map(|p| metric.of_point(p))
        .fold(1.0_f64, f64::max);

    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            metric.of_point(point).map(|value| Bar {
                rect: bar_rect(value, i, count, max_value, dims),
                value,
                month: point.month.clone(),
            })
        })
        .collect();
    let months: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();

    ChartGeometry {
        path: String::new(),
        points: Vec::new(),
        bars,
        ticks: ticks_for(&months, dims),
        extent: None,
    }
}

/// High/low/last figures shown beside a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub high: f64,
    pub low: f64,
    pub last: f64,
}

/// Summarize the observed values of `metric`, ignoring null months.
/// `None` when the series never observes the metric.
pub fn summarize(series: &[AggregatedPoint], metric: Metric) -> Option<SeriesSummary> {
    let values: Vec<f64> = series.iter().filter_map(|p| metric.of_point(p)).collect();
    let last = *values.last()?;
    let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let low = values.iter().copied().fold(f64::INFINITY, f64::min);
    Some(SeriesSummary { high, low, last })
}

fn ticks_for(months: &[&str], dims: &ChartDimensions) -> Vec<TickLabel> {
    tick_indices(months.len())
        .into_iter()
        .map(|index| TickLabel {
            index,
            x: x_position(index, months.len(), dims),
            label: month_label(months[index]),
        })
        .collect()
}
