//! Todo Frontend Entry Point

mod models;
mod config;
mod error;
mod commands;
mod render;
mod sync;
mod chat;
mod context;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    mount_to_body(App);
}
