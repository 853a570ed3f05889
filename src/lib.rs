//! Tehran Market Retail-Flow Bot
//!
//! A daily monitor for Tehran Stock Exchange retail-investor statistics.
//!
//! ## Architecture
//!
//! ```text
//! PageClient (scrape) → Series (parse/order) → Indicators → Sentiment
//!                                                   ↓
//!                            Report → Narrative (LLM) → Notifier (Telegram)
//!                                                   ↓
//!                                          Speech (TTS audio)
//! ```
//!
//! The pipeline is strictly sequential and stateless across runs; the
//! series is rebuilt from a fresh scrape every time.

pub mod client;
pub mod config;
pub mod error;
pub mod indicators;
pub mod market;
pub mod narrative;
pub mod notify;
pub mod report;
pub mod sentiment;
pub mod speech;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod integration_tests;
