//! # Market Statistics Engine
//!
//! `marketstats` blends per-ZIP monthly housing statistics into a single
//! weighted time series for a parent geography (a market or neighborhood),
//! and derives everything a stats page renders from it: month-over-month
//! and year-over-year trend deltas, a display window, and chart-ready
//! geometry for line and bar charts.
//!
//! ## Features
//!
//! - Additive merging of ZIP weight mappings across overlapping geographies
//! - Weighted-average and gated-sum reductions with strict null propagation
//! - MoM/YoY percentage trends with division-by-zero treated as unknown
//! - SVG-style line paths, bar rectangles, tick labels, and hit testing
//!
//! The engine is pure and synchronous: no I/O, no shared state, one
//! allocation-scoped pass per page render.
//!
//! ## Example
//!
//! ```
//! use marketstats::{
//!     aggregate, build_weight_table, project, trend, window,
//!     ChartDimensions, Metric, MonthlyStatRecord, ZipWeight,
//! };
//!
//! let weights = build_weight_table(&[vec![ZipWeight {
//!     zip: "29464".to_string(),
//!     weight: Some(2.0),
//! }]]);
//! let records = vec![MonthlyStatRecord {
//!     zip: "29464".to_string(),
//!     month: "2024-01".to_string(),
//!     median_listing_price: Some(450_000.0),
//!     ..Default::default()
//! }];
//!
//! let series = aggregate(&records, &weights);
//! let mom = trend(&series, Metric::MedianListingPrice);
//! let recent = window(&series, 12);
//! let chart = project(recent, Metric::MedianListingPrice, &ChartDimensions::default());
//! assert!(mom.is_none()); // one month of history
//! assert_eq!(chart.points.len(), 1);
//! ```

pub mod aggregation;
pub mod charting;
pub mod source;
pub mod trend;
pub mod types;
pub mod utils;
pub mod weights;
pub mod window;

// Re-export the functional surface for convenience
pub use aggregation::aggregate;
pub use charting::{
    nearest_index, project, summarize, ChartDimensions, ChartGeometry, Padding, SeriesSummary,
};
pub use source::{parse_records, parse_weight_mappings, SourceError};
pub use trend::{trend, trend_points, trend_yoy, TrendPoint};
pub use types::{AggregatedPoint, AggregatedSeries, Metric, MonthlyStatRecord, Reduction, ZipWeight};
pub use weights::{build_weight_table, WeightTable};
pub use window::{window, DEFAULT_WINDOW};
