//! Item Entity
//!
//! A single todo entry: identifier, text, and completion flag.

use serde::{Deserialize, Serialize};

/// Item identifier, unique for the lifetime of a [`TodoList`](crate::TodoList)
pub type ItemId = u64;

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Text as typed by the user (untrimmed)
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this item with `completed` negated
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
