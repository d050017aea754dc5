//! Stats Footer Component

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::TodoStateStoreFields;

/// "X of Y completed", only for a non-empty list
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_todo_context().store;
    let stats = move || store.list().read().stats();

    view! {
        <Show when=move || stats().is_visible()>
            <div class="stats-footer">
                <p>{move || stats().to_string()}</p>
            </div>
        </Show>
    }
}
