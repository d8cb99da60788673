//! Todo Frontend App
//!
//! Main application component: task board on the left, chat on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpBackend;
use crate::components::{ChatPanel, NewTaskForm, StatusBanner, TaskList};
use crate::config::ApiConfig;
use crate::context::{AppContext, Origin};
use crate::render::TaskBoard;
use crate::sync;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    log::info!("Using todos at {} and chat at {}", config.todos_url, config.chat_url);

    // State
    let (board, set_board) = signal(TaskBoard::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), HttpBackend::new(config));
    provide_context(ctx);

    // Load tasks on mount and on every trigger
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Reloading tasks, trigger={}", trigger);
        let backend = ctx.backend();
        spawn_local(async move {
            match sync::load_tasks(&backend).await {
                Ok(loaded) => {
                    set_board.set(loaded);
                    ctx.succeeded(Origin::Reload);
                }
                Err(e) => ctx.report(Origin::Reload, "Loading tasks", e),
            }
        });
    });

    let pending = Signal::derive(move || board.get().pending);
    let completed = Signal::derive(move || board.get().completed);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"To-Do List"</h1>

                <StatusBanner />

                <NewTaskForm />

                <TaskList list_id="pendingTasks" heading="Pending" rows=pending />
                <TaskList list_id="completedTasks" heading="Completed" rows=completed />

                <p class="task-count">
                    {move || if board.get().is_empty() {
                        "No tasks yet".to_string()
                    } else {
                        format!("{} tasks", board.get().len())
                    }}
                </p>
            </main>

            <ChatPanel />
        </div>
    }
}
