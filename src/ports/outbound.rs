//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Assistant,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Assistant => "assistant",
            Role::User => "user",
        }
    }
}

/// One role-tagged message sent to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Text-generation service (OpenAI-compatible chat completions).
#[async_trait::async_trait]
pub trait AiPort: Send + Sync {
    /// Submit an ordered conversation and return the text of the first reply.
    ///
    /// `Ok(None)` means the service answered without content. Transport and
    /// API failures are `Err` so callers can tell them apart from empty replies.
    async fn complete(&self, turns: &[Turn]) -> Result<Option<String>, DomainError>;
}
