//! Weighted blending of per-ZIP monthly records into a single series.
//!
//! Records are grouped by exact month string, then each metric is reduced
//! across the ZIPs reporting it that month. Price-like metrics are weighted
//! averages; inventory counts are raw sums gated by weight-table membership.
//! A metric no ZIP reports stays `None` rather than becoming 0.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::types::{AggregatedPoint, AggregatedSeries, Metric, MonthlyStatRecord, Reduction};
use crate::utils::{is_valid_month, safe_div};
use crate::weights::WeightTable;

/// Blend `records` into one ordered point per distinct month.
///
/// Months absent from the input are not backfilled; the output is sorted
/// ascending by month string (lexicographic order is chronological for
/// zero-padded `"YYYY-MM"`). Records for ZIPs outside the table, or with
/// malformed months, are ignored. An empty record list or an empty table
/// yields an empty series.
pub fn aggregate(records: &[MonthlyStatRecord], weights: &WeightTable) -> AggregatedSeries {
    if records.is_empty() || weights.is_empty() {
        return Vec::new();
    }

    // BTreeMap keeps the month groups in the final output order.
    let mut by_month: BTreeMap<&str, Vec<&MonthlyStatRecord>> = BTreeMap::new();
    for record in records {
        if !is_valid_month(&record.month) {
            warn!("skipping record with malformed month {:?}", record.month);
            continue;
        }
        if weights.get(&record.zip).is_none() {
            warn!("skipping record for unmapped zip {}", record.zip);
            continue;
        }
        by_month.entry(record.month.as_str()).or_default().push(record);
    }

    let series: AggregatedSeries = by_month
        .into_iter()
        .map(|(month, group)| reduce_month(month, &group, weights))
        .collect();
    debug!(
        "aggregated {} records into {} monthly points",
        records.len(),
        series.len()
    );
    series
}

fn reduce_month(
    month: &str,
    group: &[&MonthlyStatRecord],
    weights: &WeightTable,
) -> AggregatedPoint {
    let mut point = AggregatedPoint {
        month: month.to_string(),
        ..Default::default()
    };
    for metric in Metric::ALL {
        let value = match metric.reduction() {
            Reduction::Average => weighted_average(group, metric, weights),
            Reduction::Sum => gated_sum(group, metric, weights),
        };
        metric.set(&mut point, value);
    }
    point
}

/// `Σ(v·w) / Σw`, where both sums run over only the ZIPs reporting the
/// metric this month. A ZIP missing one metric must not dilute the average
/// of the metrics it does report, so the denominator is per-metric.
fn weighted_average(
    group: &[&MonthlyStatRecord],
    metric: Metric,
    weights: &WeightTable,
) -> Option<f64> {
    let mut total = 0.0;
    let mut total_weight = 0.0;
    for record in group {
        let (Some(value), Some(weight)) = (metric.of_record(record), weights.get(&record.zip))
        else {
            continue;
        };
        total += value * weight;
        total_weight += weight;
    }
    safe_div(total, total_weight)
}

/// Raw sum of values over reporting ZIPs. The weight gates inclusion (an
/// unmapped ZIP never reaches this point) but does not scale the count.
fn gated_sum(group: &[&MonthlyStatRecord], metric: Metric, weights: &WeightTable) -> Option<f64> {
    let mut total = 0.0;
    let mut contributed = false;
    for record in group {
        let (Some(value), Some(_)) = (metric.of_record(record), weights.get(&record.zip)) else {
            continue;
        };
        total += value;
        contributed = true;
    }
    contributed.then_some(total)
}
