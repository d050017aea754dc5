//! Todo Input Component
//!
//! Controlled text field plus "Add" button. The configured submit key
//! (Enter by default) submits while the field has focus.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{store_set_draft, store_submit_draft, TodoStateStoreFields};

#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = use_todo_context();
    let store = ctx.store;
    let placeholder = ctx.config.with_value(|config| config.placeholder.clone());

    let submit = move || {
        if let Some(id) = store_submit_draft(&store) {
            log::info!("[INPUT] added item #{}", id);
        }
    };

    view! {
        <div class="todo-input-row">
            <input
                type="text"
                class="todo-input"
                placeholder=placeholder
                prop:value=move || store.draft().read().text().to_string()
                on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ctx.config.with_value(|config| config.is_submit_key(&ev.key(), ev.is_composing())) {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <button type="button" class="add-btn" on:click=move |_| submit()>
                "Add"
            </button>
        </div>
    }
}
