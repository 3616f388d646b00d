//! # Common Types
//!
//! This module contains the common types used throughout the crate for
//! representing per-ZIP housing statistics and their blended aggregates.

use serde::{Deserialize, Serialize};

/// A ZIP code's declared contribution to a parent geography.
///
/// Weights come from CMS-authored mappings and may be omitted; an absent,
/// non-finite, or negative weight means "full contribution" (1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipWeight {
    /// US postal code, case-sensitive string key
    pub zip: String,
    /// Fractional contribution (e.g. housing-unit share); `None` defaults to 1
    #[serde(default)]
    pub weight: Option<f64>,
}

/// One monthly observation for one ZIP, as supplied by the data provider.
///
/// A `None` metric means "no observation for that ZIP this month" and is
/// excluded from that month's reduction rather than treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatRecord {
    pub zip: String,
    /// Calendar month in zero-padded `"YYYY-MM"` form
    pub month: String,
    #[serde(default)]
    pub median_listing_price: Option<f64>,
    #[serde(default)]
    pub median_listing_price_yoy: Option<f64>,
    #[serde(default)]
    pub price_per_sqft: Option<f64>,
    #[serde(default)]
    pub active_listing_count: Option<f64>,
    #[serde(default)]
    pub active_listing_count_yoy: Option<f64>,
    #[serde(default)]
    pub pending_listing_count: Option<f64>,
    #[serde(default)]
    pub median_days_on_market: Option<f64>,
    #[serde(default)]
    pub market_hotness_score: Option<f64>,
    #[serde(default)]
    pub market_hotness_rank: Option<f64>,
}

/// One blended observation per month for the parent geography.
///
/// Same metric set as [`MonthlyStatRecord`]; each value is a weighted
/// reduction across contributing ZIPs, or `None` when no ZIP contributed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPoint {
    pub month: String,
    pub median_listing_price: Option<f64>,
    pub median_listing_price_yoy: Option<f64>,
    pub price_per_sqft: Option<f64>,
    pub active_listing_count: Option<f64>,
    pub active_listing_count_yoy: Option<f64>,
    pub pending_listing_count: Option<f64>,
    pub median_days_on_market: Option<f64>,
    pub market_hotness_score: Option<f64>,
    pub market_hotness_rank: Option<f64>,
}

/// A month-ordered sequence of [`AggregatedPoint`]s, ascending by month.
pub type AggregatedSeries = Vec<AggregatedPoint>;

/// How a metric is reduced across ZIPs within one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Weighted mean over contributing ZIPs
    Average,
    /// Raw sum over contributing ZIPs; the weight only gates inclusion
    Sum,
}

/// The closed set of provider metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    MedianListingPrice,
    MedianListingPriceYoY,
    PricePerSqft,
    ActiveListingCount,
    ActiveListingCountYoY,
    PendingListingCount,
    MedianDaysOnMarket,
    MarketHotnessScore,
    MarketHotnessRank,
}

impl Metric {
    /// Every supported metric, in provider schema order.
    pub const ALL: [Metric; 9] = [
        Metric::MedianListingPrice,
        Metric::MedianListingPriceYoY,
        Metric::PricePerSqft,
        Metric::ActiveListingCount,
        Metric::ActiveListingCountYoY,
        Metric::PendingListingCount,
        Metric::MedianDaysOnMarket,
        Metric::MarketHotnessScore,
        Metric::MarketHotnessRank,
    ];

    /// Listing counts accumulate as raw sums; everything else, including
    /// the provider's precomputed YoY deltas, is a weighted average.
    pub fn reduction(&self) -> Reduction {
        match self {
            Metric::ActiveListingCount | Metric::PendingListingCount => Reduction::Sum,
            _ => Reduction::Average,
        }
    }

    /// Read this metric from a raw record, filtering out non-finite values.
    pub fn of_record(&self, record: &MonthlyStatRecord) -> Option<f64> {
        let value = match self {
            Metric::MedianListingPrice => record.median_listing_price,
            Metric::MedianListingPriceYoY => record.median_listing_price_yoy,
            Metric::PricePerSqft => record.price_per_sqft,
            Metric::ActiveListingCount => record.active_listing_count,
            Metric::ActiveListingCountYoY => record.active_listing_count_yoy,
            Metric::PendingListingCount => record.pending_listing_count,
            Metric::MedianDaysOnMarket => record.median_days_on_market,
            Metric::MarketHotnessScore => record.market_hotness_score,
            Metric::MarketHotnessRank => record.market_hotness_rank,
        };
        value.filter(|v| v.is_finite())
    }

    /// Read this metric from an aggregated point.
    pub fn of_point(&self, point: &AggregatedPoint) -> Option<f64> {
        match self {
            Metric::MedianListingPrice => point.median_listing_price,
            Metric::MedianListingPriceYoY => point.median_listing_price_yoy,
            Metric::PricePerSqft => point.price_per_sqft,
            Metric::ActiveListingCount => point.active_listing_count,
            Metric::ActiveListingCountYoY => point.active_listing_count_yoy,
            Metric::PendingListingCount => point.pending_listing_count,
            Metric::MedianDaysOnMarket => point.median_days_on_market,
            Metric::MarketHotnessScore => point.market_hotness_score,
            Metric::MarketHotnessRank => point.market_hotness_rank,
        }
    }

    /// Write this metric on an aggregated point.
    pub fn set(&self, point: &mut AggregatedPoint, value: Option<f64>) {
        match self {
            Metric::MedianListingPrice => point.median_listing_price = value,
            Metric::MedianListingPriceYoY => point.median_listing_price_yoy = value,
            Metric::PricePerSqft => point.price_per_sqft = value,
            Metric::ActiveListingCount => point.active_listing_count = value,
            Metric::ActiveListingCountYoY => point.active_listing_count_yoy = value,
            Metric::PendingListingCount => point.pending_listing_count = value,
            Metric::MedianDaysOnMarket => point.median_days_on_market = value,
            Metric::MarketHotnessScore => point.market_hotness_score = value,
            Metric::MarketHotnessRank => point.market_hotness_rank = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reduction_classes() {
        assert_eq!(Metric::ActiveListingCount.reduction(), Reduction::Sum);
        assert_eq!(Metric::PendingListingCount.reduction(), Reduction::Sum);
        assert_eq!(Metric::MedianListingPrice.reduction(), Reduction::Average);
        assert_eq!(Metric::ActiveListingCountYoY.reduction(), Reduction::Average);
    }

    #[test]
    fn test_non_finite_record_values_read_as_absent() {
        let record = MonthlyStatRecord {
            zip: "29464".to_string(),
            month: "2024-01".to_string(),
            median_listing_price: Some(f64::NAN),
            price_per_sqft: Some(f64::INFINITY),
            active_listing_count: Some(42.0),
            ..Default::default()
        };

        assert_eq!(Metric::MedianListingPrice.of_record(&record), None);
        assert_eq!(Metric::PricePerSqft.of_record(&record), None);
        assert_eq!(Metric::ActiveListingCount.of_record(&record), Some(42.0));
    }

    #[test]
    fn test_metric_set_round_trip_on_point() {
        let mut point = AggregatedPoint {
            month: "2024-01".to_string(),
            ..Default::default()
        };
        for metric in Metric::ALL {
            metric.set(&mut point, Some(7.5));
        }
        for metric in Metric::ALL {
            assert_eq!(metric.of_point(&point), Some(7.5));
        }
    }

    #[test]
    fn test_record_deserializes_from_provider_camel_case() {
        let json = r#"{
            "zip": "29466",
            "month": "2024-03",
            "medianListingPrice": 525000,
            "activeListingCount": 31,
            "marketHotnessScore": null
        }"#;
        let record: MonthlyStatRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.zip, "29466");
        assert_eq!(record.median_listing_price, Some(525000.0));
        assert_eq!(record.active_listing_count, Some(31.0));
        assert_eq!(record.market_hotness_score, None);
        assert_eq!(record.pending_listing_count, None);
    }
}
