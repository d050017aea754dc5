//! Todo App
//!
//! Root component: a single card with the input, the list and the stats.

use leptos::prelude::*;

use crate::components::{StatsFooter, ThemeToggle, TodoInput, TodoListView};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::store::TodoStateStoreFields;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let title = config.title.clone();
    let show_theme_toggle = config.show_theme_toggle;

    let ctx = TodoContext::new(config);
    provide_context(ctx);

    let store = ctx.store;
    let root_class = move || format!("todo-app {}", store.theme().get().class_name());

    view! {
        <div class=root_class>
            <div class="todo-card">
                <header class="todo-header">
                    <h1>{title}</h1>
                    <Show when=move || show_theme_toggle>
                        <ThemeToggle />
                    </Show>
                </header>

                <TodoInput />
                <TodoListView />
                <StatsFooter />
            </div>
        </div>
    }
}
