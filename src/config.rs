//! UI Configuration
//!
//! Optional JSON block embedded in `index.html`:
//! `<script id="todo-config" type="application/json">{ ... }</script>`.
//! Missing fields fall back to defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Priority;

/// Element id of the embedded config block
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub default_priority: Priority,
    /// Delay before a deleted item leaves the list
    pub exit_transition_ms: u32,
    pub log_level: String,
    pub log_capacity: usize,
    pub clear_completed_title: String,
    pub clear_completed_description: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Todo App".to_string(),
            default_priority: Priority::Medium,
            exit_transition_ms: 200,
            log_level: "info".to_string(),
            log_capacity: console_logger::DEFAULT_CAPACITY,
            clear_completed_title: "Clear completed todos?".to_string(),
            clear_completed_description: "This will permanently remove all completed todos.".to_string(),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Read the embedded block. No block means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }
}
