//! Task List Component
//!
//! One of the two board columns (pending or completed).

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::render::TaskRow;

#[component]
pub fn TaskList(
    /// Element id of the `<ul>`
    list_id: &'static str,
    heading: &'static str,
    #[prop(into)] rows: Signal<Vec<TaskRow>>,
) -> impl IntoView {
    view! {
        <section class="task-list">
            <h2>{heading} " (" {move || rows.get().len()} ")"</h2>
            <ul id=list_id>
                <For
                    each=move || rows.get()
                    // Label carries id, title and status, so any change re-renders the row
                    key=|row| (row.id, row.label.clone(), row.detail.clone())
                    children=move |row| view! { <TaskItem row=row /> }
                />
            </ul>
        </section>
    }
}
