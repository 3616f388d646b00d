//! Month-over-month and year-over-year trend deltas.

use crate::types::{AggregatedPoint, Metric};
use crate::utils::{safe_div, year_earlier};

/// Percent change of `metric` between the last two points of `series`.
///
/// `None` when the series has fewer than two points, either value is
/// absent, or the previous value is 0 (an unknown, not infinity).
pub fn trend(series: &[AggregatedPoint], metric: Metric) -> Option<f64> {
    let [.., prev, last] = series else {
        return None;
    };
    percent_change(metric.of_point(last)?, metric.of_point(prev)?)
}

/// Percent change of `metric` between the last point and the point twelve
/// months earlier, or `None` when that month is absent from the series.
pub fn trend_yoy(series: &[AggregatedPoint], metric: Metric) -> Option<f64> {
    let last = series.last()?;
    let prior_month = year_earlier(&last.month)?;
    let prior = series.iter().find(|p| p.month == prior_month)?;
    percent_change(metric.of_point(last)?, metric.of_point(prior)?)
}

/// Each point of `series` paired with its MoM delta for `metric`, computed
/// against the immediately preceding point. The first point has no delta.
pub fn trend_points(series: &[AggregatedPoint], metric: Metric) -> Vec<TrendPoint<'_>> {
    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let delta = (i > 0)
                .then(|| {
                    let value = metric.of_point(point)?;
                    let prev = metric.of_point(&series[i - 1])?;
                    percent_change(value, prev)
                })
                .flatten();
            TrendPoint { point, delta }
        })
        .collect()
}

/// An aggregated point annotated with its MoM percentage delta.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint<'a> {
    pub point: &'a AggregatedPoint,
    pub delta: Option<f64>,
}

fn percent_change(current: f64, previous: f64) -> Option<f64> {
    safe_div(current - previous, previous).map(|r| r * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(month: &str, price: Option<f64>) -> AggregatedPoint {
        AggregatedPoint {
            month: month.to_string(),
            median_listing_price: price,
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_mom_trend() {
        let series = vec![
            point("2024-01", Some(400_000.0)),
            point("2024-02", Some(420_000.0)),
        ];
        assert_eq!(trend(&series, Metric::MedianListingPrice), Some(5.0));
    }

    #[test]
    fn test_single_point_has_no_trend() {
        let series = vec![point("2024-01", Some(400_000.0))];
        assert_eq!(trend(&series, Metric::MedianListingPrice), None);
        assert_eq!(trend(&[], Metric::MedianListingPrice), None);
    }

    #[test]
    fn test_zero_previous_value_yields_none() {
        let series = vec![point("2024-01", Some(0.0)), point("2024-02", Some(500.0))];
        assert_eq!(trend(&series, Metric::MedianListingPrice), None);
    }

    #[test]
    fn test_absent_previous_value_yields_none() {
        let series = vec![point("2024-01", None), point("2024-02", Some(500.0))];
        assert_eq!(trend(&series, Metric::MedianListingPrice), None);
    }

    #[test]
    fn test_only_last_two_points_considered() {
        let series = vec![
            point("2024-01", Some(100.0)),
            point("2024-02", Some(200.0)),
            point("2024-03", Some(150.0)),
        ];
        assert_eq!(trend(&series, Metric::MedianListingPrice), Some(-25.0));
    }

    #[test]
    fn test_yoy_against_point_twelve_months_prior() {
        let series = vec![
            point("2023-03", Some(400_000.0)),
            point("2023-09", Some(450_000.0)),
            point("2024-03", Some(440_000.0)),
        ];
        let yoy = trend_yoy(&series, Metric::MedianListingPrice).unwrap();
        assert!((yoy - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_yoy_none_when_prior_month_absent() {
        let series = vec![
            point("2023-06", Some(400_000.0)),
            point("2024-03", Some(440_000.0)),
        ];
        assert_eq!(trend_yoy(&series, Metric::MedianListingPrice), None);
    }

    #[test]
    fn test_trend_points_annotate_each_point() {
        let series = vec![
            point("2024-01", Some(100.0)),
            point("2024-02", Some(110.0)),
            point("2024-03", None),
            point("2024-04", Some(121.0)),
        ];
        let annotated = trend_points(&series, Metric::MedianListingPrice);
        let deltas: Vec<_> = annotated.iter().map(|t| t.delta).collect();
        assert_eq!(deltas[0], None);
        assert!((deltas[1].unwrap() - 10.0).abs() < 1e-9);
        // a gap breaks the chain on both sides
        assert_eq!(deltas[2], None);
        assert_eq!(deltas[3], None);
    }
}
