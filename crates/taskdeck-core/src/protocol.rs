use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::task::{Task, TaskPriority, TaskStatus};

pub const UNKNOWN_ERROR: &str = "Неизвестная ошибка";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Server(String),
}

/// The `{success, data?, error?}` wrapper every endpoint answers with.
/// `message` and `total` are sent by the server but unused here.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub data: Option<Value>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub total: Option<u64>,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body)
            .map_err(|err| ApiError::Server(format!("Некорректный ответ сервера: {err}")))
    }

    fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}

/// A missing or non-list-shaped `data` payload degrades to the empty list
/// instead of an error.
pub fn tasks_from_envelope(envelope: &Envelope) -> Result<Vec<Task>, ApiError> {
    if !envelope.success {
        return Err(ApiError::Server(envelope.failure_message()));
    }

    let Some(data) = envelope.data.clone() else {
        return Ok(Vec::new());
    };

    match serde_json::from_value::<Vec<Task>>(data) {
        Ok(tasks) => Ok(tasks),
        Err(err) => {
            warn!(error = %err, "task list payload is not list-shaped, rendering empty");
            Ok(Vec::new())
        }
    }
}

pub fn ack_from_envelope(envelope: &Envelope) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Server(envelope.failure_message()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}
