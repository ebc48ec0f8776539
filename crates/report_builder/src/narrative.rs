//! Narrative backend client.
//!
//! Talks to an OpenRouter-compatible `chat/completions` endpoint. The
//! backend is a black box: it accepts a string prompt and returns free
//! text, and any failure is surfaced to the caller rather than patched
//! over with placeholder prose. The API key is always injected by the
//! caller; there is no default credential.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";

#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl NarrativeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: 1500,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

pub struct NarrativeClient {
    http: reqwest::blocking::Client,
    config: NarrativeConfig,
}

impl NarrativeClient {
    pub fn new(config: NarrativeConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    /// Send one prompt and return the first completion.
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        log::debug!("narrative request: {} ({})", url, self.config.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .context("narrative request failed")?
            .error_for_status()
            .context("narrative backend returned an error status")?;

        let body: ChatResponse =
            response.json().context("invalid narrative response body")?;
        let Some(choice) = body.choices.into_iter().next() else {
            bail!("narrative backend returned no choices");
        };
        Ok(choice.message.content)
    }
}
