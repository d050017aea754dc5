//! Item id source.

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Monotonic id counter. Ids start at 1 and are never handed out twice,
/// even after the item that held them is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: ItemId,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> ItemId {
        let id = self.next;
        self.next += 1;
        id
    }
}
