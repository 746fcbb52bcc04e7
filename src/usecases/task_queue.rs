//! In-memory task queue. The head is the current task.

use crate::domain::Task;
use uuid::Uuid;

/// Break shown between the current task and the rest of the queue.
pub const BREAK_MINUTES: u32 = 5;

/// Ordered list of tasks for one session.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Vec<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task with a fresh id. Returns the stored task.
    pub fn push(&mut self, title: impl Into<String>, duration_minutes: u32) -> &Task {
        self.tasks.push(Task::new(title, duration_minutes));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn current(&self) -> Option<&Task> {
        self.tasks.first()
    }

    /// Tasks after the current one.
    pub fn upcoming(&self) -> &[Task] {
        self.tasks.get(1..).unwrap_or_default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Drop the current task; the next one becomes current.
    pub fn complete_current(&mut self) -> Option<Task> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(self.tasks.remove(0))
        }
    }

    /// Break length, present only when something follows the current task.
    pub fn break_minutes(&self) -> Option<u32> {
        (self.tasks.len() > 1).then_some(BREAK_MINUTES)
    }

    /// Planned minutes for the whole queue, break included.
    pub fn total_minutes(&self) -> u32 {
        let work: u32 = self
            .tasks
            .iter()
            .fold(0u32, |acc, t| acc.saturating_add(t.duration_minutes));
        work.saturating_add(self.break_minutes().unwrap_or(0))
    }
}
