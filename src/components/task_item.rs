//! Task Item Component
//!
//! Individual row in a task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, Origin};
use crate::render::TaskRow;
use crate::sync;

/// A single task row with toggle and delete buttons
#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id;
    let toggle_to = row.toggle_to;

    let on_toggle = move |_| {
        let backend = ctx.backend();
        spawn_local(async move {
            match sync::toggle_complete(&backend, &ctx, id, toggle_to).await {
                Ok(()) => ctx.succeeded(Origin::Write),
                Err(e) => ctx.report(Origin::Write, "Updating task", e),
            }
        });
    };

    let on_delete = move |_| {
        let backend = ctx.backend();
        spawn_local(async move {
            match sync::delete_task(&backend, &ctx, id).await {
                Ok(()) => ctx.succeeded(Origin::Write),
                Err(e) => ctx.report(Origin::Write, "Deleting task", e),
            }
        });
    };

    let title = (!row.detail.is_empty()).then(|| row.detail.clone());

    view! {
        <li class=if toggle_to { "task-row" } else { "task-row completed" } title=title>
            {row.label}
            <button class="toggle-btn" on:click=on_toggle>{row.toggle_label}</button>
            <button class="delete-btn" on:click=on_delete>{row.delete_label}</button>
        </li>
    }
}
