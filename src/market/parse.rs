//! Cell and row parsers for the scraped history table
//!
//! All parsers are pure and total: malformed input degrades to a neutral
//! default (`0.0` / `0`) instead of erroring, so one bad cell never blocks
//! the report.

use super::DailyRecord;

/// Fixed column layout of the history table
const COL_DATE: usize = 0;
const COL_TRADE_VALUE: usize = 1;
const COL_BUYER_POWER: usize = 2;
const COL_BUYER_POWER_5D: usize = 3;
const COL_BUYER_POWER_20D: usize = 4;
const COL_MONEY_INFLOW: usize = 5;
const COL_MONEY_INFLOW_5D: usize = 6;
const COL_MONEY_INFLOW_20D: usize = 7;
const COL_TOTAL_INDEX: usize = 8;
const COL_EQUAL_WEIGHT_INDEX: usize = 9;
const MIN_COLUMNS: usize = 10;

/// Parse a monetary magnitude, normalized to billions.
///
/// Strips thousands separators. A trailing `B` (billions) leaves the
/// numeral unchanged, a trailing `M` (millions) divides by 1000; both are
/// case-insensitive. Anything non-numeric yields `0.0`.
pub fn parse_money(text: &str) -> f64 {
    let cleaned = text.trim().replace(',', "");
    let lower = cleaned.to_lowercase();

    let (numeral, scale) = if let Some(stripped) = lower.strip_suffix('b') {
        (stripped.trim_end(), 1.0)
    } else if let Some(stripped) = lower.strip_suffix('m') {
        (stripped.trim_end(), 0.001)
    } else {
        (lower.as_str(), 1.0)
    };

    numeral.parse::<f64>().map(|v| v * scale).unwrap_or(0.0)
}

/// Parse an index level as an integer, `0` on malformed input.
pub fn parse_index(text: &str) -> i64 {
    text.trim().replace(',', "").parse::<i64>().unwrap_or(0)
}

/// Parse one table row into a record.
///
/// Returns `None` for rows with too few cells or a non-positive trade
/// value — a filtering policy (the page pads with placeholder rows), not
/// a validation error.
pub fn parse_row(cells: &[String]) -> Option<DailyRecord> {
    if cells.len() < MIN_COLUMNS {
        return None;
    }

    let trade_value = parse_money(&cells[COL_TRADE_VALUE]);
    if trade_value <= 0.0 {
        return None;
    }

    Some(DailyRecord {
        date: cells[COL_DATE].trim().to_string(),
        trade_value,
        buyer_power: parse_money(&cells[COL_BUYER_POWER]),
        buyer_power_5d: parse_money(&cells[COL_BUYER_POWER_5D]),
        buyer_power_20d: parse_money(&cells[COL_BUYER_POWER_20D]),
        money_inflow: parse_money(&cells[COL_MONEY_INFLOW]),
        money_inflow_5d: parse_money(&cells[COL_MONEY_INFLOW_5D]),
        money_inflow_20d: parse_money(&cells[COL_MONEY_INFLOW_20D]),
        total_index: parse_index(&cells[COL_TOTAL_INDEX]),
        equal_weight_index: parse_index(&cells[COL_EQUAL_WEIGHT_INDEX]),
    })
}
