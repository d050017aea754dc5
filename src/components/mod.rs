//! UI Components
//!
//! Leptos components making up the todo page.

mod todo_input;
mod todo_row;
mod todo_list_view;
mod stats_footer;
mod theme_toggle;

pub use todo_input::TodoInput;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use stats_footer::StatsFooter;
pub use theme_toggle::ThemeToggle;
