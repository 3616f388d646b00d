//! ZIP weight resolution.
//!
//! Markets and neighborhoods declare overlapping ZIP mappings in the CMS;
//! this module merges them into a single table used for every reduction in
//! one aggregation request.

use std::collections::BTreeMap;

use log::debug;

use crate::types::ZipWeight;

/// Default contribution when a mapping omits its weight.
const DEFAULT_WEIGHT: f64 = 1.0;

/// Resolved ZIP -> accumulated weight table for one parent geography.
///
/// Built once per aggregation request and immutable afterwards. Where the
/// same ZIP appears in more than one source mapping (two neighborhoods
/// sharing a ZIP), the weights are summed rather than overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    entries: BTreeMap<String, f64>,
}

impl WeightTable {
    /// Merge one or more CMS mappings into a table.
    ///
    /// An absent, non-finite, or negative weight counts as 1 (full
    /// contribution); blank ZIP strings are skipped. Entries whose
    /// accumulated weight is 0 are dropped so a zero-weight ZIP never
    /// reaches a reduction.
    pub fn build(mappings: &[Vec<ZipWeight>]) -> Self {
        let mut entries: BTreeMap<String, f64> = BTreeMap::new();
        for mapping in mappings {
            for entry in mapping {
                if entry.zip.is_empty() {
                    continue;
                }
                let weight = entry
                    .weight
                    .filter(|w| w.is_finite() && *w >= 0.0)
                    .unwrap_or(DEFAULT_WEIGHT);
                *entries.entry(entry.zip.clone()).or_insert(0.0) += weight;
            }
        }
        entries.retain(|_, weight| *weight > 0.0);
        debug!("built weight table with {} zips", entries.len());
        Self { entries }
    }

    /// Accumulated weight for `zip`, or `None` when the ZIP is unmapped.
    pub fn get(&self, zip: &str) -> Option<f64> {
        self.entries.get(zip).copied()
    }

    /// The mapped ZIP codes, ascending.
    pub fn zips(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merge mappings into a [`WeightTable`].
pub fn build_weight_table(mappings: &[Vec<ZipWeight>]) -> WeightTable {
    WeightTable::build(mappings)
}
