//! Console Logger
//!
//! A `log` backend for WASM frontends. Records are formatted as
//! `HH:MM:SS.mmm [LEVEL target] message` and written to the browser console
//! at the matching console level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Browser console logger
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            &timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Can only succeed once per page; later calls return the `log` error.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Format one log line
pub fn format_record(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} [{:<5} {}] {}", timestamp, level, target, message)
}

/// Wall-clock time of day from the JS `Date` (UTC)
fn timestamp() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        now.get_utc_hours(),
        now.get_utc_minutes(),
        now.get_utc_seconds(),
        now.get_utc_milliseconds()
    )
}
