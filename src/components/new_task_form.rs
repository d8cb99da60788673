//! New Task Form Component
//!
//! Title input plus submit button for creating tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, Origin};
use crate::sync;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let title = RwSignal::new(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let backend = ctx.backend();
        spawn_local(async move {
            match sync::add_task(&backend, &title, &ctx).await {
                Ok(true) => ctx.succeeded(Origin::Write),
                Ok(false) => {}
                Err(e) => ctx.report(Origin::Write, "Adding task", e),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                id="taskTitle"
                type="text"
                placeholder="Add new task..."
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
