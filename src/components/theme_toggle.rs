//! Theme Toggle Component
//!
//! Switches between the light and dark presets.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{store_toggle_theme, TodoStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_todo_context().store;
    let theme = move || store.theme().get();

    view! {
        <button
            type="button"
            class=move || if theme().is_dark() { "theme-btn active" } else { "theme-btn" }
            on:click=move |_| store_toggle_theme(&store)
        >
            {move || theme().toggle_label()}
        </button>
    }
}
