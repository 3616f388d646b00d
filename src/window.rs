//! Display windowing of an aggregated series.

use crate::types::AggregatedPoint;

/// Months shown on the stats section by default.
pub const DEFAULT_WINDOW: usize = 12;

/// The last `n` points of `series` in their original month order.
///
/// Returns the whole series when it is shorter than `n`; never copies,
/// mutates, or re-sorts the input.
pub fn window(series: &[AggregatedPoint], n: usize) -> &[AggregatedPoint] {
    let start = series.len().saturating_sub(n);
    &series[start..]
}
