//! Mock AI adapter for testing without API calls.
//!
//! Replays a scripted reply (or failure) and records what it was sent.

use crate::domain::DomainError;
use crate::ports::{AiPort, Turn};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
enum Script {
    Reply(Option<String>),
    Fail(String),
}

/// Mock AI adapter for testing.
///
/// Returns a predetermined reply without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockAiAdapter {
    script: Script,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    sent: Mutex<Vec<Vec<Turn>>>,
}

impl MockAiAdapter {
    /// Adapter that always answers with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::scripted(Script::Reply(Some(reply.into())))
    }

    /// Adapter that answers without any content.
    pub fn empty() -> Self {
        Self::scripted(Script::Reply(None))
    }

    /// Adapter whose every call fails like an unreachable service.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::scripted(Script::Fail(reason.into()))
    }

    /// Set the simulated network delay.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Conversations received so far, in call order.
    pub fn sent(&self) -> Vec<Vec<Turn>> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn scripted(script: Script) -> Self {
        Self {
            script,
            delay_ms: 0,
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl AiPort for MockAiAdapter {
    async fn complete(&self, turns: &[Turn]) -> Result<Option<String>, DomainError> {
        info!(turns = turns.len(), "[MOCK] Simulating chat completion");

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(turns.to_vec());
        }

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail(reason) => Err(DomainError::Ai(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Role;

    #[tokio::test]
    async fn test_mock_adapter_records_turns() {
        let adapter = MockAiAdapter::with_reply("12");
        let turns = vec![Turn::new(Role::User, "Write tests")];

        let reply = adapter.complete(&turns).await.unwrap();

        assert_eq!(reply.as_deref(), Some("12"));
        assert_eq!(adapter.sent(), vec![turns]);
    }

    #[tokio::test]
    async fn test_mock_adapter_failing() {
        let adapter = MockAiAdapter::failing("connection refused");
        let err = adapter.complete(&[]).await.unwrap_err();
        assert!(matches!(err, DomainError::Ai(_)));
    }
}
