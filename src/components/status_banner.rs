//! Status Banner Component
//!
//! Shows the last failed backend call until dismissed or superseded by a success.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.last_error.get().map(|msg| view! {
            <div class="status-banner error" role="alert">
                <span class="status-text">{msg.text}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.clear_error()>"×"</button>
            </div>
        })}
    }
}
