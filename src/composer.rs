//! Input Composer
//!
//! Scratch state behind the new-todo form.

use chrono::NaiveDate;
use thiserror::Error;

use crate::dates;
use crate::models::{Priority, TodoDraft};

/// Why a draft field or submit was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("todo text is empty")]
    EmptyText,
    #[error("due date {date} is before today ({today})")]
    PastDueDate { date: NaiveDate, today: NaiveDate },
}

/// Reject due dates before `today`
pub fn check_due_date(date: Option<NaiveDate>, today: NaiveDate) -> Result<(), DraftError> {
    match date {
        Some(date) if !dates::is_selectable(date, today) => Err(DraftError::PastDueDate { date, today }),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    pub text: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    /// Priority / due date row expanded
    pub show_advanced: bool,
    default_priority: Priority,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(Priority::default())
    }
}

impl Composer {
    pub fn new(default_priority: Priority) -> Self {
        Self {
            text: String::new(),
            priority: default_priority,
            due_date: None,
            show_advanced: false,
            default_priority,
        }
    }

    /// Submit button state
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn toggle_advanced(&mut self) {
        self.show_advanced = !self.show_advanced;
    }

    pub fn set_due_date(&mut self, date: Option<NaiveDate>, today: NaiveDate) -> Result<(), DraftError> {
        check_due_date(date, today)?;
        self.due_date = date;
        Ok(())
    }

    /// Build the new-todo request and reset. Blank text leaves everything as is.
    pub fn submit(&mut self) -> Result<TodoDraft, DraftError> {
        let draft = TodoDraft {
            text: self.text.clone(),
            priority: self.priority,
            due_date: self.due_date,
        }
        .normalized()
        .ok_or(DraftError::EmptyText)?;
        self.reset();
        Ok(draft)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.default_priority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_submit_trims_and_resets() {
        let today = date(2026, 3, 5);
        let mut composer = Composer::default();
        composer.text = "  Buy milk  ".to_string();
        composer.priority = Priority::High;
        composer.set_due_date(Some(date(2026, 3, 10)), today).unwrap();
        composer.toggle_advanced();

        let draft = composer.submit().unwrap();
        assert_eq!(draft.text, "Buy milk");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.due_date, Some(date(2026, 3, 10)));
        assert_eq!(composer, Composer::default());
    }

    #[test]
    fn test_blank_submit_keeps_scratch() {
        let mut composer = Composer::default();
        composer.text = "   ".to_string();
        composer.priority = Priority::Low;
        assert!(!composer.can_submit());
        assert_eq!(composer.submit(), Err(DraftError::EmptyText));
        assert_eq!(composer.text, "   ");
        assert_eq!(composer.priority, Priority::Low);
    }

    #[test]
    fn test_past_due_date_rejected() {
        let today = date(2026, 3, 5);
        let mut composer = Composer::default();
        let err = composer.set_due_date(Some(date(2026, 3, 4)), today).unwrap_err();
        assert_eq!(err, DraftError::PastDueDate { date: date(2026, 3, 4), today });
        assert_eq!(composer.due_date, None);

        composer.set_due_date(Some(today), today).unwrap();
        assert_eq!(composer.due_date, Some(today));
        composer.set_due_date(None, today).unwrap();
        assert_eq!(composer.due_date, None);
    }

    #[test]
    fn test_reset_uses_configured_priority() {
        let mut composer = Composer::new(Priority::Low);
        composer.text = "x".to_string();
        composer.priority = Priority::High;
        composer.submit().unwrap();
        assert_eq!(composer.priority, Priority::Low);
    }
}
