//! Completion stats shown under the list.

use std::fmt;

/// Completed vs total item counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub completed: usize,
    pub total: usize,
}

impl Stats {
    /// The label is only shown for a non-empty list
    pub fn is_visible(&self) -> bool {
        self.total > 0
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} completed", self.completed, self.total)
    }
}
