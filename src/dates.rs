//! Due Date Helpers
//!
//! Today boundary, past-date rejection and display formatting.

use chrono::{Local, NaiveDate};

/// Format used by `<input type="date">`
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Only today or later can be picked
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    Today,
    Upcoming,
}

impl DueStatus {
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        if date < today {
            DueStatus::Overdue
        } else if date == today {
            DueStatus::Today
        } else {
            DueStatus::Upcoming
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "due-overdue",
            DueStatus::Today => "due-today",
            DueStatus::Upcoming => "due-upcoming",
        }
    }
}

/// "Today" or e.g. "Mar 05, 2026"
pub fn format_due(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else {
        date.format("%b %d, %Y").to_string()
    }
}

/// Label for the picker button
pub fn picker_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %d").to_string(),
        None => "Due date".to_string(),
    }
}

/// Parse an input value. Empty or malformed values give None.
pub fn parse_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

pub fn to_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string()).unwrap_or_default()
}
