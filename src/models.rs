//! Frontend Models
//!
//! Data structures matching the REST backend payloads.

use serde::{Deserialize, Serialize};

/// Backend task identifier
pub type TaskId = u64;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /api/v1/todos`
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
}

/// Body of `PATCH /api/v1/todos/{id}`
#[derive(Debug, Serialize)]
pub struct TaskPatch {
    pub completed: bool,
}

/// Body of `POST /chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response of `POST /chat`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
