//! Todo List View Component
//!
//! Rows in insertion order, or the empty-state message.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todo_context;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_todo_context();
    let store = ctx.store;
    let empty_message = ctx.config.with_value(|config| config.empty_message.clone());

    let is_empty = move || store.list().read().is_empty();
    let items = move || store.list().read().items().to_vec();

    view! {
        <div class="todo-list">
            <Show
                when=move || !is_empty()
                fallback=move || view! { <p class="empty-state">{empty_message.clone()}</p> }
            >
                <For
                    each=items
                    // completed is part of the key so a toggle re-renders the row
                    key=|item| (item.id, item.completed)
                    children=move |item| view! { <TodoRow item=item /> }
                />
            </Show>
        </div>
    }
}
