//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! only owner of the todo collection; components mutate it through the
//! helper functions below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{count_todos, filter_todos, TodoCounts};
use crate::models::{FilterMode, Todo, TodoDraft, TodoId};
use crate::todos::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos in insertion order
    pub todos: TodoList,
    /// Which todos the list shows
    pub filter: FilterMode,
    /// Case-insensitive text filter
    pub search_term: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Append a todo with a fresh id
pub fn store_add_todo(store: &AppStore, draft: TodoDraft) -> Option<TodoId> {
    let id = store.todos().write().add(draft);
    match id {
        Some(id) => log::info!("[STORE] Added todo {}", id),
        None => log::debug!("[STORE] Ignored blank todo"),
    }
    id
}

/// Flip completion of a todo
pub fn store_toggle_todo(store: &AppStore, id: TodoId) {
    if let Some(completed) = store.todos().write().toggle(id) {
        log::debug!("[STORE] Todo {} completed={}", id, completed);
    }
}

/// Remove a todo by ID
pub fn store_delete_todo(store: &AppStore, id: TodoId) {
    if store.todos().write().remove(id) {
        log::info!("[STORE] Deleted todo {}", id);
    }
}

/// Merge edited fields into a todo
pub fn store_update_todo(store: &AppStore, id: TodoId, patch: TodoDraft) {
    if store.todos().write().update(id, patch) {
        log::info!("[STORE] Updated todo {}", id);
    }
}

/// Remove every completed todo
pub fn store_clear_completed(store: &AppStore) -> usize {
    let removed = store.todos().write().clear_completed();
    log::info!("[STORE] Cleared {} completed todos", removed);
    removed
}

pub fn store_set_filter_mode(store: &AppStore, mode: FilterMode) {
    *store.filter().write() = mode;
}

pub fn store_set_search_term(store: &AppStore, term: String) {
    *store.search_term().write() = term;
}

// ========================
// Derived Views
// ========================

/// Todos matching the current filter and search term
pub fn store_visible_todos(store: &AppStore) -> Vec<Todo> {
    let mode = store.filter().get();
    let term = store.search_term().get();
    filter_todos(store.todos().read().items(), mode, &term)
}

pub fn store_counts(store: &AppStore) -> TodoCounts {
    count_todos(store.todos().read().items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn make_store() -> AppStore {
        Owner::new().set();
        Store::new(AppState::default())
    }

    fn make_draft(text: &str) -> TodoDraft {
        TodoDraft::new(text)
    }

    fn visible_ids(store: &AppStore) -> Vec<TodoId> {
        store_visible_todos(store).iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_and_search_through_store() {
        let store = make_store();
        let milk = store_add_todo(&store, make_draft("  Buy milk ")).unwrap();
        let shake = store_add_todo(&store, make_draft("milk shake")).unwrap();
        store_add_todo(&store, make_draft("Walk dog")).unwrap();
        store_toggle_todo(&store, shake);

        assert_eq!(store.todos().get().get(milk).unwrap().text, "Buy milk");

        store_set_filter_mode(&store, FilterMode::Active);
        store_set_search_term(&store, "MILK".to_string());
        assert_eq!(visible_ids(&store), vec![milk]);

        store_set_filter_mode(&store, FilterMode::All);
        assert_eq!(visible_ids(&store), vec![milk, shake]);

        let counts = store_counts(&store);
        assert_eq!(counts.active, 2);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn test_blank_add_ignored() {
        let store = make_store();
        assert_eq!(store_add_todo(&store, make_draft("   ")), None);
        assert!(store_visible_todos(&store).is_empty());
    }

    #[test]
    fn test_update_and_delete_unknown() {
        let store = make_store();
        let id = store_add_todo(&store, make_draft("Draft report")).unwrap();

        store_update_todo(&store, id, TodoDraft {
            priority: Priority::High,
            ..TodoDraft::new("Send report")
        });
        let todo = store.todos().get().get(id).cloned().unwrap();
        assert_eq!(todo.text, "Send report");
        assert_eq!(todo.priority, Priority::High);

        let before = store.todos().get();
        store_delete_todo(&store, TodoId(999));
        store_toggle_todo(&store, TodoId(999));
        assert_eq!(store.todos().get(), before);

        store_delete_todo(&store, id);
        assert!(store_visible_todos(&store).is_empty());
    }

    #[test]
    fn test_clear_completed_counts_removed() {
        let store = make_store();
        let keep = store_add_todo(&store, make_draft("Keep")).unwrap();
        let done = store_add_todo(&store, make_draft("Done")).unwrap();
        store_toggle_todo(&store, done);

        assert_eq!(store_clear_completed(&store), 1);
        assert_eq!(visible_ids(&store), vec![keep]);
        assert_eq!(store_clear_completed(&store), 0);
    }
}
