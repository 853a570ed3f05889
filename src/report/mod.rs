//! Report assembly
//!
//! Turns indicator and classifier outputs into the Telegram HTML message.
//! Indicators that produced no value (series too short) are simply left
//! out of the report.

#[cfg(test)]
mod tests;

use crate::config::AlertConfig;
use crate::indicators::{
    self, CrossoverSignals, Delta, ProximityAlert, Trend, YearRange,
};
use crate::market::Series;
use crate::sentiment::GaugeReading;

const MA_WINDOWS: [usize; 3] = [5, 10, 30];

/// Assembled daily report
#[derive(Debug, Clone)]
pub struct MarketReport {
    /// Telegram-ready HTML body
    pub html: String,
    /// Gauge reading for the latest session
    pub gauge: GaugeReading,
}

/// Build the daily report from the series.
///
/// With an empty series this still returns a (terse) report rather than
/// failing; partial data is always preferred over no message.
pub fn build(series: &Series, alerts: &AlertConfig) -> MarketReport {
    let mut html = String::from("📊 <b>Tehran market retail flow</b>\n");

    let trade_value = series.last().map(|r| r.trade_value).unwrap_or(0.0);
    let gauge = GaugeReading::from_trade_value(trade_value);

    if let Some(last) = series.last() {
        html.push_str(&format!("🗓 {}\n\n", last.date));

        html.push_str(&format!("💵 Trade value: <code>{} B</code>", fmt_num(last.trade_value)));
        if let Some(delta) = indicators::day_over_day(series, |r| r.trade_value) {
            html.push_str(&format!(" ({})", fmt_delta(&delta)));
        }
        html.push('\n');

        html.push_str(&format!(
            "{} Sentiment: <b>{}</b> (needle at {:.0}%)\n",
            gauge.bucket.emoji(),
            gauge.bucket.label(),
            gauge.position * 100.0,
        ));

        html.push_str(&format!(
            "🤝 Buyer power: <code>{:.2}</code> (5d {:.2} / 20d {:.2})\n",
            last.buyer_power, last.buyer_power_5d, last.buyer_power_20d,
        ));
        html.push_str(&format!(
            "💸 Money flow: <code>{:+} B</code> (5d {:+} / 20d {:+})\n",
            fmt_signed(last.money_inflow),
            fmt_signed(last.money_inflow_5d),
            fmt_signed(last.money_inflow_20d),
        ));

        push_moving_averages(&mut html, series);
        push_crossovers(&mut html, indicators::crossover_signals(series));
        push_indices(&mut html, series, alerts);
    } else {
        html.push_str("\n⚠️ No usable rows in today's table.\n");
    }

    MarketReport { html, gauge }
}

fn push_moving_averages(html: &mut String, series: &Series) {
    let mut lines = Vec::new();
    for window in MA_WINDOWS {
        if let Some(mean) = indicators::trailing_mean(series, window) {
            let arrow = match indicators::trend_arrow(series, window) {
                Some(Trend::Rising) => " ↗️",
                Some(Trend::Falling) => " ↘️",
                Some(Trend::Flat) => " ➡️",
                None => "",
            };
            lines.push(format!("  MA{window}: <code>{} B</code>{arrow}", fmt_num(mean)));
        }
    }
    if !lines.is_empty() {
        html.push_str("\n📐 <b>Trade-value averages</b>\n");
        for line in lines {
            html.push_str(&line);
            html.push('\n');
        }
    }
}

fn push_crossovers(html: &mut String, signals: Option<CrossoverSignals>) {
    let Some(signals) = signals else { return };

    html.push_str(&format!(
        "\n📈 Short-term trend (5d/10d): <b>{}</b>\n",
        if signals.short_term_up { "up" } else { "down" }
    ));
    html.push_str(&format!(
        "📉 Main trend (10d/30d): <b>{}</b>\n",
        if signals.main_trend_up { "up" } else { "down" }
    ));

    if signals.bullish_crossover {
        html.push_str("🟢 Bullish crossover: 5d broke above the 10d average\n");
    }
    if signals.bearish_crossover {
        html.push_str("🔴 Bearish crossover: 5d fell below the 10d average\n");
    }
    if signals.golden_cross {
        html.push_str("✨ <b>Golden cross</b>: 10d broke above the 30d average\n");
    }
    if signals.death_cross {
        html.push_str("💀 <b>Death cross</b>: 10d fell below the 30d average\n");
    }
}

fn push_indices(html: &mut String, series: &Series, alerts: &AlertConfig) {
    let fields: [(&str, fn(&crate::market::DailyRecord) -> f64); 2] = [
        ("Total index", |r| r.total_index as f64),
        ("Equal-weight index", |r| r.equal_weight_index as f64),
    ];

    html.push_str("\n🏛 <b>Indices</b>\n");
    for (name, field) in fields {
        let Some(last) = series.last() else { break };
        html.push_str(&format!("  {name}: <code>{}</code>", fmt_num(field(last))));
        if let Some(delta) = indicators::day_over_day(series, field) {
            html.push_str(&format!(" ({})", fmt_delta(&delta)));
        }
        if let Some(hw) = indicators::high_watermark(series, field) {
            if hw.new_record {
                html.push_str(" 🎉 new all-time high");
            }
        }
        html.push('\n');

        if let Some(range) = indicators::trailing_year_range(series, field) {
            push_year_range(html, field(last), &range, alerts.proximity_threshold_pct);
        }
    }
}

fn push_year_range(html: &mut String, current: f64, range: &YearRange, threshold_pct: f64) {
    html.push_str(&format!(
        "    52w range: <code>{}</code> – <code>{}</code> ({:+.1}% from high, {:+.1}% from low)\n",
        fmt_num(range.low),
        fmt_num(range.high),
        range.pct_from_high,
        range.pct_from_low,
    ));

    match indicators::proximity_alert(current, range.high, range.low, threshold_pct) {
        Some(ProximityAlert::NearHigh { distance_pct }) => {
            html.push_str(&format!(
                "    ⚠️ Within {distance_pct:.1}% of the yearly high\n"
            ));
        }
        Some(ProximityAlert::NearLow { distance_pct }) => {
            html.push_str(&format!(
                "    ⚠️ Within {distance_pct:.1}% of the yearly low\n"
            ));
        }
        None => {}
    }
}

fn fmt_delta(delta: &Delta) -> String {
    format!("{:+}, {:+.1}%", fmt_signed(delta.change), delta.percent)
}

/// Group an integer-ish magnitude with thousands separators
fn fmt_num(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Signed magnitude without separators, for compact inline use
fn fmt_signed(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Strip HTML markup for the TTS and LLM collaborators
pub fn plain_text(html: &str) -> String {
    let fragment = scraper::Html::parse_fragment(html);
    fragment.root_element().text().collect::<String>()
}
