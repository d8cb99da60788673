//! UI Components
//!
//! Reusable Leptos components.

mod task_item;
mod task_list;
mod new_task_form;
mod chat_panel;
mod status_banner;

pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use new_task_form::NewTaskForm;
pub use chat_panel::ChatPanel;
pub use status_banner::StatusBanner;
