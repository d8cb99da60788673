//! Task Synchronization
//!
//! Read-and-render cycle plus the write operations. Every write the server
//! answered, with success or an error status, is followed by a resync
//! notification; nothing is updated locally.
//!
//! Toggle targets come from the last rendered board, so two toggles on the
//! same row before the reload lands both send the same value.

use crate::commands::Backend;
use crate::error::ApiError;
use crate::models::TaskId;
use crate::render::{render, TaskBoard};

/// Request a full reload of the task board
pub trait Resync {
    fn resync(&self);
}

/// A text field the operations read from and clear
pub trait TextInput {
    fn value(&self) -> String;
    fn clear(&self);
}

/// Resync after a write unless the request never reached the server
pub fn settle<T, R: Resync>(result: Result<T, ApiError>, resync: &R) -> Result<T, ApiError> {
    match &result {
        Ok(_) => resync.resync(),
        Err(e) if e.reached_server() => resync.resync(),
        Err(_) => {}
    }
    result
}

/// Fetch the full collection and render it
pub async fn load_tasks<B: Backend>(backend: &B) -> Result<TaskBoard, ApiError> {
    let tasks = backend.list_tasks().await?;
    log::info!("Loaded {} tasks", tasks.len());
    Ok(render(&tasks))
}

pub async fn toggle_complete<B: Backend, R: Resync>(
    backend: &B,
    resync: &R,
    id: TaskId,
    completed: bool,
) -> Result<(), ApiError> {
    settle(backend.set_completed(id, completed).await, resync)
}

/// Create a task from the input's title.
///
/// Returns `Ok(false)` without touching the network when the title is blank.
pub async fn add_task<B: Backend, I: TextInput, R: Resync>(
    backend: &B,
    input: &I,
    resync: &R,
) -> Result<bool, ApiError> {
    let title = input.value();
    if title.trim().is_empty() {
        return Ok(false);
    }
    let created = backend.create_task(&title).await;
    if created.is_ok() {
        input.clear();
    }
    settle(created, resync)?;
    Ok(true)
}

pub async fn delete_task<B: Backend, R: Resync>(
    backend: &B,
    resync: &R,
    id: TaskId,
) -> Result<(), ApiError> {
    settle(backend.delete_task(id).await, resync)
}
