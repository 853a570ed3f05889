//! Configuration loading
//!
//! All settings are read once at startup from a TOML file (with environment
//! overrides prefixed `BOURSE_`) into an immutable `Config` that is passed
//! into every component that needs it.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
    pub telegram: Option<TelegramConfig>,
    pub llm: Option<LlmConfig>,
    pub speech: Option<SpeechConfig>,
}

/// Statistics page to scrape
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// URL of the daily retail-flow statistics page
    pub url: String,
    /// CSS selector for the history table
    #[serde(default = "default_table_selector")]
    pub table_selector: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Alert thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    /// Percentage distance that counts as "near" a yearly extreme
    #[serde(default = "default_proximity_threshold")]
    pub proximity_threshold_pct: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_pct: default_proximity_threshold(),
        }
    }
}

/// Telegram notification settings
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    #[serde(default = "default_true")]
    pub notify_errors: bool,
    /// Also send the report as a voice-over audio file
    #[serde(default)]
    pub send_audio: bool,
}

/// LLM commentary settings
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// "deepseek", "openai" or "ollama"
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

/// Text-to-speech settings
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// BCP-47 language tag for the synthesized voice
    #[serde(default = "default_speech_lang")]
    pub lang: String,
    #[serde(default = "default_audio_path")]
    pub output_path: String,
}

fn default_table_selector() -> String {
    "table".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_proximity_threshold() -> f64 {
    10.0
}

fn default_true() -> bool {
    true
}

fn default_speech_lang() -> String {
    "fa".to_string()
}

fn default_audio_path() -> String {
    "analysis_audio.mp3".to_string()
}

impl Config {
    /// Load configuration from a TOML file plus `BOURSE_*` env overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(Path::new(path)))
            .add_source(
                config::Environment::with_prefix("BOURSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
