//! Frontend Models
//!
//! Todo records and the small enums the UI switches on.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique todo identifier, assigned by the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u32);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Priorities in selector order
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Unknown values fall back to the default
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Left border class for the item card
    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-low",
            Priority::Medium => "priority-medium",
            Priority::High => "priority-high",
        }
    }
}

/// A single task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl Todo {
    /// Create an incomplete todo from a validated draft
    pub fn from_draft(id: TodoId, draft: TodoDraft) -> Self {
        Self {
            id,
            text: draft.text,
            completed: false,
            priority: draft.priority,
            due_date: draft.due_date,
        }
    }

    /// Replace the editable fields
    pub fn apply(&mut self, patch: TodoDraft) {
        self.text = patch.text;
        self.priority = patch.priority;
        self.due_date = patch.due_date;
    }

    /// Editable fields as a draft
    pub fn to_draft(&self) -> TodoDraft {
        TodoDraft {
            text: self.text.clone(),
            priority: self.priority,
            due_date: self.due_date,
        }
    }
}

/// Editable fields of a todo. Used for new-todo requests and edit patches.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoDraft {
    pub text: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TodoDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Trimmed copy, or None if the text is blank
    pub fn normalized(&self) -> Option<TodoDraft> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(TodoDraft {
            text: text.to_string(),
            priority: self.priority,
            due_date: self.due_date,
        })
    }
}

/// Which todos the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Modes in button order
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !todo.completed,
            FilterMode::Completed => todo.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serialization() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }

    #[test]
    fn test_priority_string_conversion() {
        for priority in Priority::ALL {
            assert_eq!(Priority::from_str(priority.as_str()), priority);
        }
        assert_eq!(Priority::from_str("urgent"), Priority::Medium);
        assert_eq!(Priority::from_str(""), Priority::Medium);
    }

    #[test]
    fn test_draft_normalized_trims() {
        let draft = TodoDraft::new("  Buy milk  ");
        assert_eq!(draft.normalized().unwrap().text, "Buy milk");
        assert!(TodoDraft::new("   ").normalized().is_none());
        assert!(TodoDraft::new("").normalized().is_none());
    }

    #[test]
    fn test_todo_apply_keeps_id_and_completion() {
        let mut todo = Todo::from_draft(TodoId(7), TodoDraft::new("Old"));
        todo.completed = true;
        todo.apply(TodoDraft {
            text: "New".to_string(),
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2030, 1, 2),
        });
        assert_eq!(todo.id, TodoId(7));
        assert!(todo.completed);
        assert_eq!(todo.text, "New");
        assert_eq!(todo.priority, Priority::High);
    }

    #[test]
    fn test_filter_mode_matches() {
        let mut todo = Todo::from_draft(TodoId(1), TodoDraft::new("x"));
        assert!(FilterMode::All.matches(&todo));
        assert!(FilterMode::Active.matches(&todo));
        assert!(!FilterMode::Completed.matches(&todo));
        todo.completed = true;
        assert!(!FilterMode::Active.matches(&todo));
        assert!(FilterMode::Completed.matches(&todo));
    }
}
