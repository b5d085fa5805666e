use crate::task::{TaskPriority, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskQuery {
    /// The filter selects use the empty string as their "no filter" value.
    pub fn from_select_values(status: &str, priority: &str) -> Self {
        let status = if status.is_empty() {
            None
        } else {
            Some(TaskStatus::from(status.to_string()))
        };
        let priority = if priority.is_empty() {
            None
        } else {
            Some(TaskPriority::from(priority.to_string()))
        };

        Self { status, priority }
    }

    pub fn query_string(&self) -> String {
        let mut pairs = Vec::new();

        if let Some(status) = &self.status {
            pairs.push(format!("status={}", status.as_str()));
        }
        if let Some(priority) = &self.priority {
            pairs.push(format!("priority={}", priority.as_str()));
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }

    pub fn list_url(&self, base: &str) -> String {
        format!("{base}{}", self.query_string())
    }
}
