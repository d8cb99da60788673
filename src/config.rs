//! API Configuration
//!
//! Endpoint paths for the todo and chat backends. The host page may override
//! them with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="todo-config">
//!   {"todos_url": "/api/v1/todos", "chat_url": "/chat"}
//! </script>
//! ```

use serde::Deserialize;

/// Element id of the optional inline config block
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

pub const DEFAULT_TODOS_URL: &str = "/api/v1/todos";
pub const DEFAULT_CHAT_URL: &str = "/chat";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Collection endpoint; single tasks live at `{todos_url}/{id}`
    pub todos_url: String,
    pub chat_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            todos_url: DEFAULT_TODOS_URL.to_string(),
            chat_url: DEFAULT_CHAT_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Parse an inline config block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: ApiConfig = serde_json::from_str(raw)?;
        config.todos_url = config.todos_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Read the config block from the current document, falling back to defaults.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn task_url(&self, id: crate::models::TaskId) -> String {
        format!("{}/{}", self.todos_url, id)
    }
}
