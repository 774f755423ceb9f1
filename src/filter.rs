//! Filter Utilities
//!
//! Derives the visible todos from filter mode and search term.

use crate::models::{FilterMode, Todo};

/// Case-insensitive substring match. Empty term matches everything.
pub fn matches_search(todo: &Todo, term: &str) -> bool {
    term.is_empty() || todo.text.to_lowercase().contains(&term.to_lowercase())
}

/// Todos passing both the mode and the search term, in collection order
pub fn filter_todos(todos: &[Todo], mode: FilterMode, term: &str) -> Vec<Todo> {
    todos.iter()
        .filter(|todo| mode.matches(todo) && matches_search(todo, term))
        .cloned()
        .collect()
}

/// Active / completed totals for the header and filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub active: usize,
    pub completed: usize,
}

pub fn count_todos(todos: &[Todo]) -> TodoCounts {
    let completed = todos.iter().filter(|todo| todo.completed).count();
    TodoCounts {
        active: todos.len() - completed,
        completed,
    }
}
