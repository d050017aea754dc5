//! App Configuration
//!
//! Optional JSON block embedded in `index.html`:
//! `<script id="todo-config" type="application/json">{ ... }</script>`.
//! Every field has a default, so the block and each key are optional.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use todo_core::Theme;

/// DOM id of the embedded config block
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("submit_key must not be blank")]
    InvalidSubmitKey,
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading shown above the form
    pub title: String,
    /// Input placeholder
    pub placeholder: String,
    /// Shown instead of the list when there are no items
    pub empty_message: String,
    /// Initial theme
    pub theme: Theme,
    pub show_theme_toggle: bool,
    /// `KeyboardEvent.key` value that submits while the input has focus
    pub submit_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "My Todos".to_string(),
            placeholder: "Add a new todo...".to_string(),
            empty_message: "No todos yet. Add one above!".to_string(),
            theme: Theme::Light,
            show_theme_toggle: true,
            submit_key: "Enter".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config block
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.submit_key.trim().is_empty() {
            return Err(ConfigError::InvalidSubmitKey);
        }
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Whether a keydown should submit. Keys pressed while an IME
    /// composition is open belong to the composition.
    pub fn is_submit_key(&self, key: &str, is_composing: bool) -> bool {
        !is_composing && key == self.submit_key
    }

    /// Read the config block from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(raw) = read_config_block() else {
            log::debug!("[CONFIG] no #{} block, using defaults", CONFIG_ELEMENT_ID);
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }
}

fn read_config_block() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}
