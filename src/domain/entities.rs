//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here.

use super::DomainError;
use uuid::Uuid;

/// Maximum task name length in characters.
pub const MAX_TASK_NAME_LEN: usize = 100;

/// A queued task with its estimated duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub duration_minutes: u32,
}

impl Task {
    pub fn new(title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            duration_minutes,
        }
    }
}

/// Validated task name: non-empty after trimming, at most `MAX_TASK_NAME_LEN` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskName(String);

impl TaskName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "You have to enter a task name.".to_string(),
            ));
        }
        if name.chars().count() > MAX_TASK_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "Task name is too long (max {} characters).",
                MAX_TASK_NAME_LEN
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
