//! Todo Collection
//!
//! Ordered todo records plus the id counter. All mutations go through here;
//! unknown ids are ignored.

use crate::models::{Todo, TodoDraft, TodoId};

#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Todos in insertion order
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    /// Append a new todo. Blank text is rejected.
    pub fn add(&mut self, draft: TodoDraft) -> Option<TodoId> {
        let draft = draft.normalized()?;
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.items.push(Todo::from_draft(id, draft));
        Some(id)
    }

    /// Flip completion. Returns the new value.
    pub fn toggle(&mut self, id: TodoId) -> Option<bool> {
        self.items.iter_mut()
            .find(|todo| todo.id == id)
            .map(|todo| {
                todo.completed = !todo.completed;
                todo.completed
            })
    }

    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| todo.id != id);
        self.items.len() != before
    }

    /// Merge a patch. Blank text is rejected without touching the record.
    pub fn update(&mut self, id: TodoId, patch: TodoDraft) -> bool {
        let Some(patch) = patch.normalized() else {
            return false;
        };
        match self.items.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Drop completed todos. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|todo| !todo.completed);
        before - self.items.len()
    }
}
