//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod todo_input;
mod priority_selector;
mod due_date_picker;
mod filter_controls;
mod todo_list_view;
mod todo_item;
mod confirm_dialog;
mod log_panel;

pub use header::Header;
pub use todo_input::TodoInput;
pub use priority_selector::PrioritySelector;
pub use due_date_picker::DueDatePicker;
pub use filter_controls::FilterControls;
pub use todo_list_view::TodoListView;
pub use todo_item::TodoItem;
pub use confirm_dialog::ConfirmDialog;
pub use log_panel::LogPanel;
