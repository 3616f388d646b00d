//! Decoding of provider payloads into the model types.
//!
//! The surrounding site fetches weight mappings and monthly records as JSON
//! and hands them to this crate; decoding is the one fallible edge. Inside
//! the engine itself absent data is `None`, never an error.

use log::warn;
use thiserror::Error;

use crate::types::{MonthlyStatRecord, ZipWeight};
use crate::utils::is_valid_month;

/// Errors from decoding provider payloads.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to decode provider payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a JSON array of monthly stat records.
///
/// Records with malformed month strings are dropped here (with a warning)
/// so the aggregator only ever sees normalized `"YYYY-MM"` months.
pub fn parse_records(json: &str) -> Result<Vec<MonthlyStatRecord>, SourceError> {
    let records: Vec<MonthlyStatRecord> = serde_json::from_str(json)?;
    let total = records.len();
    let records: Vec<MonthlyStatRecord> = records
        .into_iter()
        .filter(|r| is_valid_month(&r.month))
        .collect();
    if records.len() < total {
        warn!("dropped {} records with malformed months", total - records.len());
    }
    Ok(records)
}

/// Decode a JSON array of ZIP weight mapping lists (one list per
/// contributing sub-entity).
pub fn parse_weight_mappings(json: &str) -> Result<Vec<Vec<ZipWeight>>, SourceError> {
    Ok(serde_json::from_str(json)?)
}
