//! Error types for the bot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotError>;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scrape error: {0}")]
    Scrape(String),

    #[error("No history table found at {0}")]
    TableNotFound(String),

    #[error("Telegram API error: {0}")]
    Telegram(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),
}
