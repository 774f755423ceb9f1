//! Item Editor
//!
//! View/edit state of a single rendered todo.

use chrono::NaiveDate;

use crate::composer::{check_due_date, DraftError};
use crate::models::{Priority, Todo, TodoDraft};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing(TodoDraft),
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    pub fn draft(&self) -> Option<&TodoDraft> {
        match self {
            EditState::Editing(draft) => Some(draft),
            EditState::Viewing => None,
        }
    }

    /// Start editing with the record's current fields
    pub fn begin(&mut self, todo: &Todo) {
        *self = EditState::Editing(todo.to_draft());
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if let EditState::Editing(draft) = self {
            draft.text = text.into();
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        if let EditState::Editing(draft) = self {
            draft.priority = priority;
        }
    }

    pub fn set_due_date(&mut self, date: Option<NaiveDate>, today: NaiveDate) -> Result<(), DraftError> {
        check_due_date(date, today)?;
        if let EditState::Editing(draft) = self {
            draft.due_date = date;
        }
        Ok(())
    }

    /// Finish editing. Returns the trimmed patch to apply; blank text
    /// keeps the editor open and yields `None`.
    pub fn commit(&mut self) -> Option<TodoDraft> {
        let patch = self.draft()?.normalized()?;
        *self = EditState::Viewing;
        Some(patch)
    }

    /// Drop the draft
    pub fn cancel(&mut self) {
        *self = EditState::Viewing;
    }
}

/// Key handling for the edit input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Commit,
    Cancel,
}

impl EditKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(EditKey::Commit),
            "Escape" => Some(EditKey::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;
    use crate::todos::TodoList;

    fn make_todo(text: &str) -> Todo {
        Todo::from_draft(TodoId(1), TodoDraft::new(text))
    }

    #[test]
    fn test_begin_copies_record() {
        let todo = make_todo("Write report");
        let mut state = EditState::default();
        assert!(!state.is_editing());
        state.begin(&todo);
        assert_eq!(state.draft(), Some(&todo.to_draft()));
    }

    #[test]
    fn test_commit_trims_and_returns_to_viewing() {
        let todo = make_todo("Old");
        let mut state = EditState::default();
        state.begin(&todo);
        state.set_text("  New text ");
        state.set_priority(Priority::High);
        let patch = state.commit().unwrap();
        assert_eq!(patch.text, "New text");
        assert_eq!(patch.priority, Priority::High);
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_blank_commit_is_rejected() {
        let mut list = TodoList::new();
        let id = list.add(TodoDraft::new("Original")).unwrap();
        let mut state = EditState::default();
        state.begin(list.get(id).unwrap());
        state.set_text("   ");
        assert_eq!(state.commit(), None);
        assert!(state.is_editing());
        assert_eq!(list.get(id).unwrap().text, "Original");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let todo = make_todo("Keep");
        let mut state = EditState::default();
        state.begin(&todo);
        state.set_text("Changed");
        state.cancel();
        assert_eq!(state, EditState::Viewing);

        state.begin(&todo);
        assert_eq!(state.draft().unwrap().text, "Keep");
    }

    #[test]
    fn test_setters_ignored_while_viewing() {
        let mut state = EditState::Viewing;
        state.set_text("x");
        state.set_priority(Priority::Low);
        assert_eq!(state, EditState::Viewing);
        assert_eq!(state.commit(), None);
    }

    #[test]
    fn test_past_due_date_rejected() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let mut state = EditState::default();
        state.begin(&make_todo("x"));
        assert!(state.set_due_date(NaiveDate::from_ymd_opt(2026, 3, 1), today).is_err());
        assert_eq!(state.draft().unwrap().due_date, None);
        state.set_due_date(Some(today), today).unwrap();
        assert_eq!(state.draft().unwrap().due_date, Some(today));
    }

    #[test]
    fn test_edit_keys() {
        assert_eq!(EditKey::from_key("Enter"), Some(EditKey::Commit));
        assert_eq!(EditKey::from_key("Escape"), Some(EditKey::Cancel));
        assert_eq!(EditKey::from_key("a"), None);
    }
}
