//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::store::{TodoState, TodoStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// All mutable page state
    pub store: TodoStore,
    /// Loaded once at startup, read-only afterwards
    pub config: StoredValue<AppConfig>,
}

impl TodoContext {
    pub fn new(config: AppConfig) -> Self {
        let store = Store::new(TodoState::new(config.theme));
        Self {
            store,
            config: StoredValue::new(config),
        }
    }
}

/// Get the todo context provided by `App`
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
