//! Draft Buffer
//!
//! Text being composed in the input field before it becomes an item.

use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::list::TodoList;

/// Controlled-input buffer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer content unconditionally
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether submitting would create an item. A leading/trailing BOM
    /// counts as blank, matching browser `String.prototype.trim`.
    pub fn is_submittable(&self) -> bool {
        !self
            .text
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
            .is_empty()
    }

    /// Move the buffer into `list` as a new item.
    ///
    /// The item keeps the raw, untrimmed text. A blank buffer is left as is
    /// and nothing is added.
    pub fn submit(&mut self, list: &mut TodoList) -> Option<ItemId> {
        if !self.is_submittable() {
            log::trace!("[DRAFT] submit ignored, buffer is blank");
            return None;
        }
        let text = std::mem::take(&mut self.text);
        Some(list.add(text))
    }
}
