//! Todo State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: toggling the
//! theme does not re-render the list and typing does not re-render rows.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Draft, ItemId, Theme, TodoList};

/// All client-side state of the page
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in insertion order
    pub list: TodoList,
    /// Text being composed in the input field
    pub draft: Draft,
    pub theme: Theme,
}

impl TodoState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the draft text (controlled input)
pub fn store_set_draft(store: &TodoStore, text: String) {
    store.draft().write().set_text(text);
}

/// Turn the draft into a new item. Blank drafts are left untouched.
pub fn store_submit_draft(store: &TodoStore) -> Option<ItemId> {
    let mut draft = store.draft().get_untracked();
    if !draft.is_submittable() {
        return None;
    }
    let id = draft.submit(&mut store.list().write())?;
    store.draft().set(draft);
    Some(id)
}

/// Flip completion of an item by ID
pub fn store_toggle_item(store: &TodoStore, item_id: ItemId) {
    store.list().maybe_update(|list| list.toggle(item_id));
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &TodoStore, item_id: ItemId) {
    store.list().maybe_update(|list| list.remove(item_id));
}

pub fn store_toggle_theme(store: &TodoStore) {
    store.theme().update(|theme| *theme = theme.toggled());
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::effect::ImmediateEffect;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn setup_store() -> (Owner, TodoStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(TodoState::default()))
    }

    /// Counts how often a subscriber of `store.list()` re-runs
    fn watch_list(store: TodoStore) -> (ImmediateEffect, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let effect = ImmediateEffect::new(move || {
            let _ = store.list().read().count();
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (effect, runs)
    }

    #[test]
    fn test_submit_appends_and_clears_draft() {
        let (_owner, store) = setup_store();

        store_set_draft(&store, "Buy milk".to_string());
        let id = store_submit_draft(&store).expect("Failed to submit");

        assert_eq!(store.draft().get_untracked().text(), "");
        let list = store.list().get_untracked();
        assert_eq!(list.count(), 1);
        assert_eq!(list.get(id).map(|i| i.text.as_str()), Some("Buy milk"));
    }

    #[test]
    fn test_blank_submit_keeps_draft_and_list_quiet() {
        let (_owner, store) = setup_store();
        let (_effect, runs) = watch_list(store);

        store_set_draft(&store, "   ".to_string());
        let before = runs.load(Ordering::SeqCst);

        assert_eq!(store_submit_draft(&store), None);

        assert_eq!(runs.load(Ordering::SeqCst), before);
        assert_eq!(store.draft().get_untracked().text(), "   ");
        assert!(store.list().get_untracked().is_empty());
    }

    #[test]
    fn test_missing_id_does_not_notify() {
        let (_owner, store) = setup_store();
        store_set_draft(&store, "a".to_string());
        store_submit_draft(&store);
        let (_effect, runs) = watch_list(store);
        let before = runs.load(Ordering::SeqCst);

        store_toggle_item(&store, 999);
        store_remove_item(&store, 999);

        assert_eq!(runs.load(Ordering::SeqCst), before);
        assert_eq!(store.list().get_untracked().count(), 1);
    }

    #[test]
    fn test_present_id_notifies() {
        let (_owner, store) = setup_store();
        store_set_draft(&store, "a".to_string());
        let id = store_submit_draft(&store).expect("Failed to submit");
        let (_effect, runs) = watch_list(store);
        let before = runs.load(Ordering::SeqCst);

        store_toggle_item(&store, id);
        assert!(runs.load(Ordering::SeqCst) > before);
        assert_eq!(store.list().get_untracked().completed_count(), 1);

        store_remove_item(&store, id);
        assert!(store.list().get_untracked().is_empty());
    }

    #[test]
    fn test_theme_round_trip() {
        let (_owner, store) = setup_store();
        assert_eq!(store.theme().get_untracked(), Theme::Light);
        store_toggle_theme(&store);
        assert_eq!(store.theme().get_untracked(), Theme::Dark);
        store_toggle_theme(&store);
        assert_eq!(store.theme().get_untracked(), Theme::Light);
    }
}
