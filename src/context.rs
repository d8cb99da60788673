//! Application Context
//!
//! Shared state provided via Leptos Context API, and the glue that lets the
//! sync and chat operations drive signals.

use leptos::prelude::*;

use crate::chat::{ChatLog, Role, Transcript};
use crate::commands::HttpBackend;
use crate::error::ApiError;
use crate::sync::{Resync, TextInput};

/// Which kind of operation produced a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Reload,
    Write,
}

/// A failed operation shown in the status banner
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub origin: Origin,
    pub text: String,
}

impl StatusMessage {
    /// A reload never retires a write failure; any later success retires a reload failure.
    pub fn retired_by(&self, success: Origin) -> bool {
        match self.origin {
            Origin::Reload => true,
            Origin::Write => success == Origin::Write,
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Last failed backend call, shown in the status banner
    pub last_error: RwSignal<Option<StatusMessage>>,
    backend: StoredValue<HttpBackend>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), backend: HttpBackend) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            last_error: RwSignal::new(None),
            backend: StoredValue::new(backend),
        }
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn backend(&self) -> HttpBackend {
        self.backend.get_value()
    }

    /// Log a failed operation and show it in the banner
    pub fn report(&self, origin: Origin, action: &str, err: ApiError) {
        log::error!("{} failed: {}", action, err);
        self.last_error.set(Some(StatusMessage {
            origin,
            text: format!("{} failed: {}", action, err),
        }));
    }

    /// Drop the banner if this success supersedes it
    pub fn succeeded(&self, origin: Origin) {
        let retired = self.last_error.with_untracked(|msg| {
            msg.as_ref().is_some_and(|m| m.retired_by(origin))
        });
        if retired {
            self.clear_error();
        }
    }

    pub fn clear_error(&self) {
        self.last_error.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

impl Resync for AppContext {
    fn resync(&self) {
        self.reload();
    }
}

/// Controlled `<input>` value
impl TextInput for RwSignal<String> {
    fn value(&self) -> String {
        self.get_untracked()
    }

    fn clear(&self) {
        self.set(String::new());
    }
}

/// Transcript signal plus the id of the scroll container it renders into
#[derive(Clone, Copy)]
pub struct ChatView {
    pub transcript: RwSignal<Transcript>,
    pub container_id: &'static str,
}

impl ChatLog for ChatView {
    fn append(&self, role: Role, text: String) {
        self.transcript.update(|t| t.push(role, text));
    }

    fn scroll_to_bottom(&self) {
        let container_id = self.container_id;
        // Wait for the appended entry to be in the DOM
        request_animation_frame(move || {
            let container = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(container_id));
            if let Some(el) = container {
                el.set_scroll_top(el.scroll_height());
            }
        });
    }
}
