//! Fear & greed classification
//!
//! Maps the session's retail trade value (billions) onto a six-bucket
//! sentiment scale and a semicircular gauge needle. Classification is
//! total and unbounded above; only the needle caps at the display ceiling.


use serde::{Deserialize, Serialize};

/// Gauge display ceiling (billions). Caps the needle, not the bucket.
pub const GAUGE_CEILING: f64 = 25_000.0;

/// Discrete market sentiment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FearGreed {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
    /// Beyond the extreme-greed band; the gauge pins at its ceiling
    ExtremeGreedPlus,
}

impl FearGreed {
    /// Classify a trade value (billions) into its sentiment bucket.
    pub fn classify(trade_value: f64) -> Self {
        match trade_value {
            v if v < 3_000.0 => FearGreed::ExtremeFear,
            v if v < 5_000.0 => FearGreed::Fear,
            v if v < 10_000.0 => FearGreed::Neutral,
            v if v < 15_000.0 => FearGreed::Greed,
            v if v < 20_000.0 => FearGreed::ExtremeGreed,
            _ => FearGreed::ExtremeGreedPlus,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FearGreed::ExtremeFear => "Extreme Fear",
            FearGreed::Fear => "Fear",
            FearGreed::Neutral => "Neutral",
            FearGreed::Greed => "Greed",
            FearGreed::ExtremeGreed => "Extreme Greed",
            FearGreed::ExtremeGreedPlus => "Extreme Greed+",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            FearGreed::ExtremeFear => "😱",
            FearGreed::Fear => "😨",
            FearGreed::Neutral => "😐",
            FearGreed::Greed => "🤑",
            FearGreed::ExtremeGreed => "🔥",
            FearGreed::ExtremeGreedPlus => "🚀",
        }
    }
}

/// Gauge reading handed to the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub bucket: FearGreed,
    /// Needle deflection as a fraction of the display ceiling, 0..1
    pub position: f64,
    /// Needle angle in degrees across the semicircle, 0..180
    pub angle_deg: f64,
}

impl GaugeReading {
    pub fn from_trade_value(trade_value: f64) -> Self {
        let position = needle_position(trade_value);
        Self {
            bucket: FearGreed::classify(trade_value),
            position,
            angle_deg: position * 180.0,
        }
    }
}

/// Needle deflection for a trade value, clamped to 0..1 of the ceiling.
pub fn needle_position(trade_value: f64) -> f64 {
    (trade_value.max(0.0).min(GAUGE_CEILING)) / GAUGE_CEILING
}
