//! Indicator engine
//!
//! Derives every trend metric used by the report from the daily series:
//! day-over-day deltas, trailing means with trend arrows, moving-average
//! crossover signals, the all-time high watermark, the trailing-year range
//! and proximity alerts.
//!
//! All operations are pure functions of the series and degrade silently:
//! a series too short for a given indicator yields `None` (the indicator
//! is omitted from the report, never an error) and every percentage guards
//! its denominator, substituting `0.0` for a division by zero.


use crate::market::{DailyRecord, Series};

/// Trading days in one year, used for the 52-week range window
const TRADING_YEAR: usize = 252;

/// Records required before crossover detection can compare yesterday's
/// 30-day mean against today's
const CROSSOVER_MIN_LEN: usize = 31;

/// Day-over-day movement of a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    pub change: f64,
    pub percent: f64,
}

/// Direction of a trailing mean versus its value one day earlier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

/// Moving-average relationship signals for the latest day
///
/// The booleans are independent checks; several may fire on the same day
/// (a plain down-trend alongside a fresh crossover, for instance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossoverSignals {
    /// 5-day mean above 10-day mean today
    pub short_term_up: bool,
    /// 10-day mean above 30-day mean today
    pub main_trend_up: bool,
    /// 5-day mean fell through the 10-day mean today
    pub bearish_crossover: bool,
    /// 5-day mean rose through the 10-day mean today
    pub bullish_crossover: bool,
    /// 10-day mean fell through the 30-day mean today
    pub death_cross: bool,
    /// 10-day mean rose through the 30-day mean today
    pub golden_cross: bool,
}

/// Historical ceiling for an index field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighWatermark {
    /// The reported ceiling: the prior maximum, or the latest value when
    /// it set a new record
    pub ceiling: f64,
    pub new_record: bool,
}

/// Min/max over the trailing year with signed distances from the latest value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRange {
    pub high: f64,
    pub low: f64,
    /// `(current - high) / high * 100`, non-positive at or below the high
    pub pct_from_high: f64,
    /// `(current - low) / low * 100`, non-negative at or above the low
    pub pct_from_low: f64,
}

/// Nearness to a yearly extreme
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProximityAlert {
    NearHigh { distance_pct: f64 },
    NearLow { distance_pct: f64 },
}

/// Percentage change with a zero-denominator guard
fn pct_change(current: f64, base: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        (current - base) / base * 100.0
    }
}

/// Day-over-day delta of `field` between the latest two records.
///
/// `None` below 2 records. The percentage is `0` when yesterday's value
/// was zero.
pub fn day_over_day<F>(series: &Series, field: F) -> Option<Delta>
where
    F: Fn(&DailyRecord) -> f64,
{
    let last = field(series.last()?);
    let prev = field(series.previous()?);
    Some(Delta {
        change: last - prev,
        percent: pct_change(last, prev),
    })
}

/// Simple trailing mean of trade value over the last `window` records.
///
/// `None` when the series is shorter than the window.
pub fn trailing_mean(series: &Series, window: usize) -> Option<f64> {
    trailing_mean_at(series.records(), window)
}

/// Trailing mean over the last `window` entries of a record slice
fn trailing_mean_at(records: &[DailyRecord], window: usize) -> Option<f64> {
    if window == 0 || records.len() < window {
        return None;
    }
    let sum: f64 = records[records.len() - window..]
        .iter()
        .map(|r| r.trade_value)
        .sum();
    Some(sum / window as f64)
}

/// Direction of the `window`-day mean versus the same mean one day earlier.
///
/// `None` when there is no full prior window (`len < window + 1`).
pub fn trend_arrow(series: &Series, window: usize) -> Option<Trend> {
    let records = series.records();
    let today = trailing_mean_at(records, window)?;
    let yesterday = trailing_mean_at(&records[..records.len() - 1], window)?;
    Some(if today > yesterday {
        Trend::Rising
    } else if today < yesterday {
        Trend::Falling
    } else {
        Trend::Flat
    })
}

/// Detect moving-average trend and crossover signals on trade value.
///
/// Compares the 5/10-day and 10/30-day means for the latest day and the
/// day before. `None` below 31 records (yesterday's 30-day mean needs a
/// full window).
pub fn crossover_signals(series: &Series) -> Option<CrossoverSignals> {
    let records = series.records();
    if records.len() < CROSSOVER_MIN_LEN {
        return None;
    }
    let yesterday = &records[..records.len() - 1];

    let ma5 = trailing_mean_at(records, 5)?;
    let ma10 = trailing_mean_at(records, 10)?;
    let ma30 = trailing_mean_at(records, 30)?;
    let ma5_prev = trailing_mean_at(yesterday, 5)?;
    let ma10_prev = trailing_mean_at(yesterday, 10)?;
    let ma30_prev = trailing_mean_at(yesterday, 30)?;

    Some(CrossoverSignals {
        short_term_up: ma5 > ma10,
        main_trend_up: ma10 > ma30,
        bearish_crossover: ma5_prev >= ma10_prev && ma5 < ma10,
        bullish_crossover: ma5_prev <= ma10_prev && ma5 > ma10,
        death_cross: ma10_prev >= ma30_prev && ma10 < ma30,
        golden_cross: ma10_prev <= ma30_prev && ma10 > ma30,
    })
}

/// All-time-high tracking for `field`.
///
/// The historical maximum is taken over every record strictly before the
/// latest one; the latest value replaces it as the reported ceiling only
/// when it sets a new record. `None` below 2 records.
pub fn high_watermark<F>(series: &Series, field: F) -> Option<HighWatermark>
where
    F: Fn(&DailyRecord) -> f64,
{
    let records = series.records();
    if records.len() < 2 {
        return None;
    }
    let current = field(&records[records.len() - 1]);
    let prior_max = records[..records.len() - 1]
        .iter()
        .map(&field)
        .fold(f64::MIN, f64::max);

    if current > prior_max {
        Some(HighWatermark {
            ceiling: current,
            new_record: true,
        })
    } else {
        Some(HighWatermark {
            ceiling: prior_max,
            new_record: false,
        })
    }
}

/// Min/max of `field` over the trailing 252 records (fewer if the series
/// is shorter) with signed distances from the latest value.
pub fn trailing_year_range<F>(series: &Series, field: F) -> Option<YearRange>
where
    F: Fn(&DailyRecord) -> f64,
{
    let records = series.records();
    let last = series.last()?;
    let start = records.len().saturating_sub(TRADING_YEAR);
    let window = &records[start..];

    let high = window.iter().map(&field).fold(f64::MIN, f64::max);
    let low = window.iter().map(&field).fold(f64::MAX, f64::min);
    let current = field(last);

    Some(YearRange {
        high,
        low,
        pct_from_high: pct_change(current, high),
        pct_from_low: pct_change(current, low),
    })
}

/// Alert when `current` sits within `threshold_pct` of a reference extreme.
///
/// The near-high check always takes priority: when both references
/// qualify, only the high alert fires. Neither within threshold → `None`.
pub fn proximity_alert(
    current: f64,
    high: f64,
    low: f64,
    threshold_pct: f64,
) -> Option<ProximityAlert> {
    let dist_high = pct_change(current, high).abs();
    let dist_low = pct_change(current, low).abs();

    if dist_high <= threshold_pct {
        Some(ProximityAlert::NearHigh {
            distance_pct: dist_high,
        })
    } else if dist_low <= threshold_pct {
        Some(ProximityAlert::NearLow {
            distance_pct: dist_low,
        })
    } else {
        None
    }
}
