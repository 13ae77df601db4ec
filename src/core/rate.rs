//! Rate feed abstractions and core types

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Display;

use super::error::FetchError;

/// One entry of a daily rate table, relative to the table's base currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    pub code: String,
    pub alpha_code: String,
    pub numeric_code: String,
    pub name: String,
    pub rate: f64,
    pub date: String,
    pub inverse_rate: f64,
}

/// Rate table keyed by target code as the feed spells it (lowercase in practice).
pub type RateTable = HashMap<String, RateRecord>;

/// Outcome of the most recent successful rate query.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQueryResult {
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub inverse_rate: f64,
    pub date: String,
    pub summary: String,
}

impl RateQueryResult {
    pub fn new(from: &str, to: &str, record: &RateRecord) -> Self {
        let summary = format!(
            "1 {from} = {:.6} {to} {date}\n1 {to} = {:.6} {from} {date}",
            record.rate,
            record.inverse_rate,
            date = record.date,
        );
        Self {
            from: from.to_string(),
            to: to.to_string(),
            rate: record.rate,
            inverse_rate: record.inverse_rate,
            date: record.date.clone(),
            summary,
        }
    }
}

impl Display for RateQueryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary)
    }
}

#[async_trait]
pub trait RateFeed: Send + Sync {
    /// Fetches the full rate table for `base_code`.
    async fn fetch_rates(&self, base_code: &str) -> Result<RateTable, FetchError>;
}
