//! LLM analyst commentary
//!
//! Optionally asks a chat-completions endpoint for a short narrative
//! reading of the day's numbers. Any failure here degrades to "no
//! commentary" — the numeric report has already been produced.

use crate::config::LlmConfig;
use crate::error::{BotError, Result};
use reqwest::Client;
use std::time::Duration;

/// Commentary generator backed by a chat-completions API
pub struct Narrator {
    http: Client,
    config: LlmConfig,
}

impl Narrator {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            config,
        }
    }

    /// Generate a 2-3 sentence commentary for the plain-text report.
    pub async fn commentary(&self, plain_report: &str) -> Result<String> {
        let prompt = format!(
            r#"You are a market analyst. Below are today's Tehran Stock Exchange
retail-flow statistics and derived indicators.

{plain_report}

Write a 2-3 sentence plain-language commentary for a general audience:
what stands out today and what it suggests about near-term sentiment.
No investment advice, no bullet points, no preamble."#
        );

        self.call_llm(&prompt).await
    }

    async fn call_llm(&self, prompt: &str) -> Result<String> {
        let (base_url, model) = match self.config.provider.to_lowercase().as_str() {
            "deepseek" => (
                "https://api.deepseek.com".to_string(),
                self.config.model.clone().unwrap_or_else(|| "deepseek-chat".to_string()),
            ),
            "openai" | "gpt" => (
                self.config.base_url.clone().unwrap_or_else(|| "https://api.openai.com".to_string()),
                self.config.model.clone().unwrap_or_else(|| "gpt-4o-mini".to_string()),
            ),
            "ollama" => (
                self.config.base_url.clone().unwrap_or_else(|| "http://localhost:11434".to_string()),
                self.config.model.clone().unwrap_or_else(|| "qwen2.5:14b".to_string()),
            ),
            _ => (
                self.config.base_url.clone().unwrap_or_else(|| "https://api.deepseek.com".to_string()),
                self.config.model.clone().unwrap_or_else(|| "deepseek-chat".to_string()),
            ),
        };

        let request = serde_json::json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
        });

        let response: serde_json::Value = self
            .http
            .post(format!("{}/v1/chat/completions", base_url.trim_end_matches('/')))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| BotError::Llm(format!("unexpected response shape: {response}")))
    }
}
