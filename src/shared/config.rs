//! Application configuration. API credentials, model, request bounds.

use crate::domain::DomainError;
use serde::Deserialize;
use std::time::Duration;

/// Default chat-completions endpoint.
pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model used for estimates.
pub const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";

/// Default bound for one estimation request, in seconds.
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// AI API key. Read from TASK_TIMER_AI_API_KEY, falls back to OPENAI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API URL. Defaults to OpenAI. Read from TASK_TIMER_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Defaults to "gpt-3.5-turbo". Read from TASK_TIMER_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Request timeout in seconds (default 20). Read from TASK_TIMER_AI_TIMEOUT_SECS.
    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TASK_TIMER"));
        if let Ok(path) = std::env::var("TASK_TIMER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        cfg = cfg.with_api_key_fallback(std::env::var("OPENAI_API_KEY").ok());
        if let Ok(s) = std::env::var("TASK_TIMER_AI_TIMEOUT_SECS") {
            if let Ok(secs) = s.parse::<u64>() {
                cfg.ai_timeout_secs = Some(secs);
            }
        }
        Ok(cfg)
    }

    /// Use `fallback` (OPENAI_API_KEY) when the prefixed key is unset or blank.
    pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
        let blank = self
            .ai_api_key
            .as_deref()
            .is_none_or(|key| key.trim().is_empty());
        if blank && fallback.is_some() {
            self.ai_api_key = fallback;
        }
        self
    }

    /// Returns the API key, or a fatal config error if it is missing or blank.
    pub fn ai_api_key(&self) -> Result<String, DomainError> {
        match self.ai_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(DomainError::Config("OPENAI_API_KEY is required".to_string())),
        }
    }

    /// Returns the AI API URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    /// Returns the AI model name. Defaults to "gpt-3.5-turbo".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    /// Returns the request timeout. Defaults to 20 seconds, never below 1.
    pub fn ai_timeout_or_default(&self) -> Duration {
        Duration::from_secs(
            self.ai_timeout_secs
                .unwrap_or(DEFAULT_AI_TIMEOUT_SECS)
                .max(1),
        )
    }
}
