//! Todo Commands
//!
//! Endpoints under `/api/v1/todos`. Write responses are ignored beyond their status.

use super::{Endpoint, HttpMethod};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{NewTask, TaskId, TaskPatch};

pub fn list_tasks(config: &ApiConfig) -> Endpoint {
    Endpoint::new(HttpMethod::Get, config.todos_url.as_str())
}

pub fn create_task(config: &ApiConfig, title: &str) -> Result<Endpoint, ApiError> {
    Endpoint::new(HttpMethod::Post, config.todos_url.as_str()).with_json(&NewTask { title })
}

pub fn set_completed(config: &ApiConfig, id: TaskId, completed: bool) -> Result<Endpoint, ApiError> {
    Endpoint::new(HttpMethod::Patch, config.task_url(id)).with_json(&TaskPatch { completed })
}

pub fn delete_task(config: &ApiConfig, id: TaskId) -> Endpoint {
    Endpoint::new(HttpMethod::Delete, config.task_url(id))
}
