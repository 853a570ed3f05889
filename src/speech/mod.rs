//! Text-to-speech synthesis
//!
//! Converts the plain-text report into an MP3 via the public translate
//! TTS endpoint. The endpoint caps input length per request, so the text
//! is split into whitespace-bounded chunks and the MP3 frames are
//! concatenated — independent frames play back seamlessly.


use crate::config::SpeechConfig;
use crate::error::{BotError, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Per-request character cap of the TTS endpoint
const MAX_CHUNK_CHARS: usize = 180;

/// Speech synthesizer
pub struct Synthesizer {
    http: Client,
    config: SpeechConfig,
}

impl Synthesizer {
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            config,
        }
    }

    /// Synthesize `text` to the configured MP3 path.
    pub async fn synthesize(&self, text: &str) -> Result<PathBuf> {
        let speakable = prepare_for_speech(text);
        let chunks = split_chunks(&speakable, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(BotError::Speech("nothing to say".to_string()));
        }

        let mut audio = Vec::new();
        for chunk in &chunks {
            let bytes = self
                .http
                .get(TTS_ENDPOINT)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", self.config.lang.as_str()),
                    ("q", chunk.as_str()),
                ])
                .send()
                .await?
                .error_for_status()
                .map_err(|e| BotError::Speech(e.to_string()))?
                .bytes()
                .await?;
            audio.extend_from_slice(&bytes);
        }

        let path = PathBuf::from(&self.config.output_path);
        tokio::fs::write(&path, &audio).await?;
        Ok(path)
    }

    pub fn output_path(&self) -> &Path {
        Path::new(&self.config.output_path)
    }
}

/// Normalize report text for reading aloud: colons become pauses and
/// leftover emoji or symbols are dropped.
pub fn prepare_for_speech(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.replace(':', ", ").chars() {
        match c {
            c if c.is_alphanumeric() || c.is_whitespace() => out.push(c),
            '.' | ',' | '%' | '+' | '-' | '/' | '(' | ')' => out.push(c),
            _ => {}
        }
    }
    // collapse runs of whitespace left behind by stripped symbols
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split into chunks of at most `max_chars` characters on whitespace
/// boundaries. Words longer than the cap become their own chunk.
fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars > 0 && current_chars + 1 + word_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
