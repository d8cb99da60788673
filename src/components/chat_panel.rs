//! Chat Panel Component
//!
//! Transcript plus message input. Replies may change tasks, so every
//! exchange ends with a task reload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::chat::{self, Transcript};
use crate::context::{use_app_context, ChatView, Origin};

const CHAT_MESSAGES_ID: &str = "chatMessages";

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_app_context();
    let message = RwSignal::new(String::new());
    let chat_view = ChatView {
        transcript: RwSignal::new(Transcript::default()),
        container_id: CHAT_MESSAGES_ID,
    };

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let backend = ctx.backend();
        spawn_local(async move {
            match chat::send_chat(&backend, &message, &chat_view, &ctx).await {
                Ok(true) => ctx.succeeded(Origin::Write),
                Ok(false) => {}
                Err(e) => ctx.report(Origin::Write, "Chat", e),
            }
        });
    };

    view! {
        <aside class="chat-panel">
            <h2>"Assistant"</h2>
            <div id=CHAT_MESSAGES_ID class="chat-messages">
                <Show when=move || chat_view.transcript.with(|t| t.is_empty())>
                    <p class="chat-hint">"Try \"add buy milk\" or \"complete task 1\"."</p>
                </Show>
                {move || chat_view.transcript.get().entries().iter().map(|entry| view! {
                    <div class=entry.role.class()>{entry.text.clone()}</div>
                }).collect_view()}
            </div>
            <form class="chat-form" on:submit=send>
                <input
                    id="chatInput"
                    type="text"
                    placeholder="Ask me to add or finish a task..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                />
                <button type="submit">"Send"</button>
            </form>
        </aside>
    }
}
