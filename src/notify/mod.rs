//! Telegram notifications
//!
//! Thin wrapper over the Bot API: HTML text messages and audio uploads.
//! A `disabled` notifier swallows everything so the pipeline can run
//! without Telegram configured.

#[cfg(test)]
mod tests;

use crate::error::{BotError, Result};
use reqwest::multipart;
use reqwest::Client;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Telegram notifier
#[derive(Clone)]
pub struct Notifier {
    http: Client,
    bot_token: String,
    chat_id: String,
    enabled: bool,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
    parse_mode: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl Notifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            // Uploads need more headroom than ordinary API calls
            http: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            bot_token,
            chat_id,
            enabled: true,
        }
    }

    /// No-op notifier for runs without Telegram configured
    pub fn disabled() -> Self {
        Self {
            http: Client::new(),
            bot_token: String::new(),
            chat_id: String::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Send an HTML-formatted message
    pub async fn send(&self, text: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let request = SendMessageRequest {
            chat_id: self.chat_id.clone(),
            text: text.to_string(),
            parse_mode: "HTML".to_string(),
        };

        let response: ApiResponse = self.http.post(&url).json(&request).send().await?.json().await?;
        if !response.ok {
            return Err(BotError::Telegram(
                response.description.unwrap_or_else(|| "sendMessage failed".to_string()),
            ));
        }
        Ok(())
    }

    /// Upload an MP3 file with a caption
    pub async fn send_audio(&self, audio_path: &Path, caption: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let url = format!("https://api.telegram.org/bot{}/sendAudio", self.bot_token);
        let bytes = tokio::fs::read(audio_path).await?;
        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "analysis_audio.mp3".to_string());

        let form = multipart::Form::new()
            .text("chat_id", self.chat_id.clone())
            .text("caption", caption.to_string())
            .text("parse_mode", "HTML".to_string())
            .part(
                "audio",
                multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str("audio/mpeg")
                    .map_err(|e| BotError::Telegram(e.to_string()))?,
            );

        let response: ApiResponse = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .json()
            .await?;
        if !response.ok {
            return Err(BotError::Telegram(
                response.description.unwrap_or_else(|| "sendAudio failed".to_string()),
            ));
        }
        Ok(())
    }

    /// Report a pipeline failure to the channel
    pub async fn error(&self, context: &str, message: &str) -> Result<()> {
        self.send(&format!("❌ <b>{context}</b>\n<code>{message}</code>"))
            .await
    }

    /// Startup ping so a silent run is distinguishable from a dead one
    pub async fn startup(&self) -> Result<()> {
        self.send(&format!(
            "🤖 bourse-bot run started at {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
        ))
        .await
    }
}
