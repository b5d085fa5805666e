use thiserror::Error;

use crate::protocol::TaskPayload;
use crate::task::{Task, TaskPriority, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Название задачи обязательно")]
    EmptyTitle,
}

/// Field state of the shared create/edit modal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
        }
    }
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
            priority: task.priority.clone(),
        }
    }

    /// Trims both text fields; an empty trimmed title rejects the draft
    /// before any request is built.
    pub fn validate(&self) -> Result<TaskPayload, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        Ok(TaskPayload {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            status: self.status.clone(),
            priority: self.priority.clone(),
        })
    }
}
