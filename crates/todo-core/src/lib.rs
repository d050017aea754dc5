//! Todo Domain Layer
//!
//! Core entities and list transforms for the todo list UI.
//! This layer has NO web dependencies (serde and log only).

mod item;
mod id;
mod list;
mod draft;
mod stats;
mod theme;

#[cfg(test)]
mod tests;

pub use item::{Item, ItemId};
pub use id::IdGenerator;
pub use list::TodoList;
pub use draft::Draft;
pub use stats::Stats;
pub use theme::Theme;
