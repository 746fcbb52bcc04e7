//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu: add a task (estimated by the AI), complete the current task,
//! remove any task, quit.

use super::progress::estimating_spinner;
use crate::domain::{DomainError, Task, TaskName};
use crate::ports::InputPort;
use crate::usecases::{EstimatorService, TaskQueue};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Select, Text};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// Applies the neon prompt theme globally for inquire.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    Complete,
    Remove,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Add => "Add task",
            MenuAction::Complete => "Complete current task",
            MenuAction::Remove => "Remove a task",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

fn task_line(task: &Task) -> String {
    format!("{}  {}", task.title, task.duration_minutes)
}

/// Text lines for the queue: current task, break, then the rest.
pub fn render_queue(queue: &TaskQueue) -> Vec<String> {
    let Some(current) = queue.current() else {
        return vec!["Add some tasks :)".to_string()];
    };

    let mut lines = vec!["Current task".to_string(), format!("> {}", task_line(current))];
    if let Some(minutes) = queue.break_minutes() {
        lines.push(format!("  | Break  {}", minutes));
    }
    lines.extend(queue.upcoming().iter().map(|t| format!("  {}", task_line(t))));
    lines.push(format!("Total: {} min", queue.total_minutes()));
    lines
}

/// Task ids paired with their menu labels, in queue order.
fn removal_options(queue: &TaskQueue) -> Vec<(Uuid, String)> {
    queue.tasks().iter().map(|t| (t.id, task_line(t))).collect()
}

/// `None` when the user cancelled the prompt (Esc / Ctrl-C).
fn prompt_result<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    estimator: Arc<EstimatorService>,
    queue: Mutex<TaskQueue>,
}

impl TuiInputPort {
    pub fn new(estimator: Arc<EstimatorService>) -> Self {
        Self {
            estimator,
            queue: Mutex::new(TaskQueue::new()),
        }
    }

    async fn print_queue(&self) {
        let queue = self.queue.lock().await;
        println!();
        println!("Tasks");
        for line in render_queue(&queue) {
            println!("{}", line);
        }
        println!();
    }

    async fn add_task(&self) -> Result<(), DomainError> {
        let Some(raw) = prompt_result(
            Text::new("Task name:")
                .with_placeholder("e.g. Reply to John's email")
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let name = match TaskName::parse(&raw) {
            Ok(name) => name,
            Err(e) => {
                println!("{}", e);
                return Ok(());
            }
        };

        let spinner = estimating_spinner(name.as_str());
        let estimation = self.estimator.estimate_detailed(name.as_str()).await;
        spinner.finish_and_clear();

        // e.g. "Write report: 0 min (unavailable: AI request timed out after 20 seconds)"
        println!("{}: {}", name.as_str(), estimation);

        let mut queue = self.queue.lock().await;
        let task = queue.push(name.into_inner(), estimation.minutes());
        info!(id = %task.id, minutes = task.duration_minutes, "task added");
        Ok(())
    }

    async fn complete_current(&self) {
        let mut queue = self.queue.lock().await;
        if let Some(task) = queue.complete_current() {
            info!(id = %task.id, "task completed");
        }
    }

    async fn remove_task(&self) -> Result<(), DomainError> {
        // Snapshot, then prompt without holding the lock.
        let (ids, labels): (Vec<Uuid>, Vec<String>) =
            removal_options(&*self.queue.lock().await).into_iter().unzip();
        if ids.is_empty() {
            return Ok(());
        }
        let Some(choice) = prompt_result(Select::new("Remove which task?", labels).raw_prompt())?
        else {
            return Ok(());
        };
        if let Some(task) = self.queue.lock().await.remove(ids[choice.index]) {
            info!(id = %task.id, "task removed");
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            self.print_queue().await;

            let actions = vec![
                MenuAction::Add,
                MenuAction::Complete,
                MenuAction::Remove,
                MenuAction::Quit,
            ];
            let action = prompt_result(Select::new("What next?", actions).prompt())?
                .unwrap_or(MenuAction::Quit);

            match action {
                MenuAction::Add => self.add_task().await?,
                MenuAction::Complete => self.complete_current().await,
                MenuAction::Remove => self.remove_task().await?,
                MenuAction::Quit => return Ok(()),
            }
        }
    }
}
