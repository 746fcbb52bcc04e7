//! OpenAI-compatible adapter for duration estimation.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `AiPort`: one POST per call, no retries.

use crate::domain::DomainError;
use crate::ports::{AiPort, Turn};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// OpenAI-compatible AI adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key
    /// * `model` - Model name (e.g., "gpt-3.5-turbo", "llama3.2")
    /// * `timeout` - Upper bound for a whole request, connect included
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
            timeout,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::Timeout(self.timeout.as_secs())
        } else {
            DomainError::Ai(format!("HTTP request failed: {}", e))
        }
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// OpenAI API response structure. Every level may be missing or null.
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<MessageContent>,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

#[async_trait::async_trait]
impl AiPort for OpenAiAdapter {
    async fn complete(&self, turns: &[Turn]) -> Result<Option<String>, DomainError> {
        let request = ChatRequest {
            model: &self.model,
            messages: turns
                .iter()
                .map(|t| ChatMessage {
                    role: t.role.as_str(),
                    content: &t.content,
                })
                .collect(),
            temperature: 0.3,
        };

        debug!(model = %self.model, turns = turns.len(), "sending chat completion");

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Ai(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Ai(format!("Failed to parse API response: {}", e)))?;

        Ok(chat_response.into_first_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_content(json: &str) -> Option<String> {
        serde_json::from_str::<ChatResponse>(json)
            .unwrap()
            .into_first_content()
    }

    #[test]
    fn test_response_with_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"15"}}]}"#;
        assert_eq!(first_content(json).as_deref(), Some("15"));
    }

    #[test]
    fn test_response_null_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert_eq!(first_content(json), None);
    }

    #[test]
    fn test_response_missing_fields() {
        assert_eq!(first_content(r#"{"choices":[]}"#), None);
        assert_eq!(first_content(r#"{"choices":[{}]}"#), None);
        assert_eq!(first_content(r#"{}"#), None);
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: vec![ChatMessage {
                role: "user",
                content: "Write report",
            }],
            temperature: 0.3,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Write report");
    }
}
