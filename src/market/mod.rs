//! Market data model
//!
//! One `DailyRecord` per trading day, held in an immutable date-ascending
//! `Series` that is rebuilt from the scraped table on every run. Nothing is
//! persisted between runs.

pub mod parse;


use serde::{Deserialize, Serialize};

/// One trading day of retail-flow statistics
///
/// Monetary magnitudes are normalized to billions of tomans. The 5d/20d
/// trailing averages are published by the source page and passed through
/// unchanged; only the `trade_value` averages are computed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Persian calendar label, e.g. "1403/05/12". Used as an opaque
    /// ordering key, never parsed as a Gregorian date.
    pub date: String,
    /// Aggregate retail trade value for the session (billions)
    pub trade_value: f64,
    /// Buy-side vs sell-side intensity ratio; >1 means buyers dominate
    pub buyer_power: f64,
    pub buyer_power_5d: f64,
    pub buyer_power_20d: f64,
    /// Net retail money flow, positive = inflow (billions)
    pub money_inflow: f64,
    pub money_inflow_5d: f64,
    pub money_inflow_20d: f64,
    /// Overall market index level
    pub total_index: i64,
    /// Equal-weight market index level
    pub equal_weight_index: i64,
}

/// Ordered history of daily records, ascending by date key
///
/// Built once per run and consumed read-only by the indicator engine and
/// the sentiment classifier.
#[derive(Debug, Clone, Default)]
pub struct Series {
    records: Vec<DailyRecord>,
}

impl Series {
    /// Build a series from raw table rows.
    ///
    /// Rows that fail to parse (too few cells, non-positive trade value)
    /// are dropped. Remaining records are sorted ascending by date key;
    /// for duplicate dates the first occurrence wins.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut records: Vec<DailyRecord> =
            rows.iter().filter_map(|r| parse::parse_row(r)).collect();
        records.sort_by(|a, b| a.date.cmp(&b.date));
        records.dedup_by(|a, b| a.date == b.date);
        Self { records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Latest trading day, if any
    pub fn last(&self) -> Option<&DailyRecord> {
        self.records.last()
    }

    /// Trading day before the latest, if any
    pub fn previous(&self) -> Option<&DailyRecord> {
        self.records.len().checked_sub(2).map(|i| &self.records[i])
    }
}
