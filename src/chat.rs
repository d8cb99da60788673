//! Chat Transcript
//!
//! Relays a message to the chat backend and records the exchange. The chat
//! backend may change tasks, so a completed exchange also requests a resync.

use crate::commands::Backend;
use crate::error::ApiError;
use crate::sync::{settle, Resync, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// CSS class of the rendered entry
    pub fn class(self) -> &'static str {
        match self {
            Role::User => "chat-message user",
            Role::Bot => "chat-message bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: Role,
    pub text: String,
}

/// Ordered user/bot entries, client-side only
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    pub fn push(&mut self, role: Role, text: impl Into<String>) {
        self.entries.push(ChatEntry { role, text: text.into() });
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where `send_chat` writes the exchange
pub trait ChatLog {
    fn append(&self, role: Role, text: String);
    fn scroll_to_bottom(&self);
}

/// Send the input's message and record the exchange.
///
/// The user entry is appended before the request goes out. On failure it
/// stays, no bot entry is added and the input keeps its text. The task
/// board is resynced whenever the chat backend answered.
pub async fn send_chat<B: Backend, I: TextInput, L: ChatLog, R: Resync>(
    backend: &B,
    input: &I,
    chat_log: &L,
    resync: &R,
) -> Result<bool, ApiError> {
    let message = input.value();
    if message.is_empty() {
        return Ok(false);
    }

    chat_log.append(Role::User, message.clone());

    let reply = match backend.send_chat(&message).await {
        Ok(reply) => reply,
        Err(e) => return settle(Err(e), resync),
    };
    log::debug!("Chat reply: {} chars", reply.len());

    chat_log.append(Role::Bot, reply);
    chat_log.scroll_to_bottom();
    input.clear();
    resync.resync();
    Ok(true)
}
