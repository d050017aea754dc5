//! Todo Collection
//!
//! Ordered list of items. Order is insertion order; nothing reorders it.
//! Lookups by id that miss are silent no-ops so stale ids from the UI
//! never fail.

use serde::{Deserialize, Serialize};

use crate::id::IdGenerator;
use crate::item::{Item, ItemId};
use crate::stats::Stats;

/// The item collection together with its id source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    items: Vec<Item>,
    ids: IdGenerator,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item with a fresh id and return that id.
    ///
    /// No validation happens here; blank-text gating lives in
    /// [`Draft::submit`](crate::Draft::submit).
    pub fn add(&mut self, text: impl Into<String>) -> ItemId {
        let id = self.ids.next_id();
        let item = Item::new(id, text);
        log::debug!("[TODO] add #{} {:?}", id, item.text);
        self.items.push(item);
        id
    }

    /// Flip `completed` on the item with `id`. Returns whether it was found.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                *item = item.toggled();
                log::debug!("[TODO] toggle #{} -> completed={}", id, item.completed);
                true
            }
            None => {
                log::trace!("[TODO] toggle #{} ignored, no such item", id);
                false
            }
        }
    }

    /// Remove the item with `id`. Returns whether it was found.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            log::debug!("[TODO] remove #{}", id);
        } else {
            log::trace!("[TODO] remove #{} ignored, no such item", id);
        }
        removed
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            completed: self.completed_count(),
            total: self.count(),
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
