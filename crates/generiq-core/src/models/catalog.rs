//! Catalog document model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Drug;

/// Errors raised while decoding a catalog payload.
#[derive(Error, Debug)]
pub enum CatalogParseError {
    #[error("unexpected payload shape: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full drug price list for a session, as published by the data
/// pipeline: a snapshot date, the record count, and the records.
///
/// The document is immutable once loaded; a payload missing any of the
/// three fields (or carrying an unparseable date) is rejected whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Snapshot date of the price list (`YYYY-MM-DD`)
    pub last_updated: NaiveDate,
    /// Number of records the pipeline collected
    pub total_count: u32,
    /// The drug records, in publication order
    pub drugs: Vec<Drug>,
}

impl Catalog {
    /// Decode a catalog from its JSON wire form.
    pub fn from_json(payload: &str) -> Result<Self, CatalogParseError> {
        Ok(serde_json::from_str(payload)?)
    }
}
