//! Test Doubles
//!
//! In-memory backend that behaves like the REST server, plus fakes for the
//! input, transcript and resync seams.

use std::cell::{Cell, RefCell};

use crate::chat::{ChatLog, Role, Transcript};
use crate::commands::Backend;
use crate::error::ApiError;
use crate::models::{Task, TaskId};
use crate::sync::{Resync, TextInput};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(String),
    SetCompleted(TaskId, bool),
    Delete(TaskId),
    Chat(String),
}

#[derive(Default)]
pub struct FakeBackend {
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<TaskId>,
    calls: RefCell<Vec<Call>>,
    reply: RefCell<String>,
    fail_next: RefCell<Option<ApiError>>,
}

impl FakeBackend {
    pub fn with_tasks(tasks: &[(&str, bool)]) -> Self {
        let backend = Self::default();
        for (title, completed) in tasks {
            backend.insert(title);
            if let Some(task) = backend.tasks.borrow_mut().last_mut() {
                task.completed = *completed;
            }
        }
        backend
    }

    pub fn set_reply(&self, reply: &str) {
        *self.reply.borrow_mut() = reply.to_string();
    }

    /// Make the next call fail with a network error
    pub fn fail_next(&self) {
        *self.fail_next.borrow_mut() = Some(ApiError::Network("connection refused".to_string()));
    }

    /// Make the next call reach the server and get `status` back
    pub fn reject_next(&self, status: u16) {
        *self.fail_next.borrow_mut() = Some(ApiError::Status {
            method: "POST",
            url: "/api/v1/todos".to_string(),
            status,
            body: String::new(),
        });
    }

    /// Recorded calls, excluding collection reads
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().iter().filter(|c| **c != Call::List).cloned().collect()
    }

    fn insert(&self, title: &str) -> TaskId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.tasks.borrow_mut().push(Task {
            id,
            title: title.to_string(),
            completed: false,
            description: String::new(),
        });
        id
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Backend for FakeBackend {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.record(Call::List)?;
        Ok(self.tasks.borrow().clone())
    }

    async fn create_task(&self, title: &str) -> Result<(), ApiError> {
        self.record(Call::Create(title.to_string()))?;
        self.insert(title);
        Ok(())
    }

    async fn set_completed(&self, id: TaskId, completed: bool) -> Result<(), ApiError> {
        self.record(Call::SetCompleted(id, completed))?;
        match self.tasks.borrow_mut().iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = completed;
                Ok(())
            }
            None => Err(ApiError::Status {
                method: "PATCH",
                url: format!("/api/v1/todos/{}", id),
                status: 404,
                body: r#"{"error":"Task not found"}"#.to_string(),
            }),
        }
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.record(Call::Delete(id))?;
        self.tasks.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }

    async fn send_chat(&self, message: &str) -> Result<String, ApiError> {
        self.record(Call::Chat(message.to_string()))?;
        Ok(self.reply.borrow().clone())
    }
}

pub struct FakeInput(RefCell<String>);

impl FakeInput {
    pub fn new(value: &str) -> Self {
        Self(RefCell::new(value.to_string()))
    }
}

impl TextInput for FakeInput {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Default)]
pub struct ResyncCounter(Cell<usize>);

impl ResyncCounter {
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Resync for ResyncCounter {
    fn resync(&self) {
        self.0.set(self.0.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeChatLog {
    transcript: RefCell<Transcript>,
    scrolls: Cell<usize>,
}

impl FakeChatLog {
    pub fn transcript(&self) -> Transcript {
        self.transcript.borrow().clone()
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.get()
    }
}

impl ChatLog for FakeChatLog {
    fn append(&self, role: Role, text: String) {
        self.transcript.borrow_mut().push(role, text);
    }

    fn scroll_to_bottom(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}
