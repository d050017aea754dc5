//! Todo Row Component
//!
//! One item: checkbox, text, delete button.

use leptos::prelude::*;
use todo_core::Item;

use crate::context::use_todo_context;
use crate::store::{store_remove_item, store_toggle_item};

/// A single item row in the list
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let store = use_todo_context().store;

    let id = item.id;
    let completed = item.completed;

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                class="todo-checkbox"
                checked=completed
                on:change=move |_| store_toggle_item(&store, id)
            />
            <span class="todo-text">{item.text}</span>
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |_| {
                    store_remove_item(&store, id);
                    log::info!("[ROW] removed item #{}", id);
                }
            >
                "×"
            </button>
        </div>
    }
}
