//! Todo List View Component
//!
//! Renders the filtered todos keyed by id, or an empty state.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::{Todo, TodoDraft, TodoId};

#[component]
pub fn TodoListView(
    #[prop(into)] todos: Signal<Vec<Todo>>,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_delete: Callback<TodoId>,
    #[prop(into)] on_update: Callback<(TodoId, TodoDraft)>,
) -> impl IntoView {
    let empty_state = || view! {
        <div class="empty-state">
            <div class="empty-state-icon">"✔"</div>
            <h3>"No todos found"</h3>
            <p>"Add a new task to get started!"</p>
        </div>
    };

    view! {
        <Show when=move || todos.with(|t| !t.is_empty()) fallback=empty_state>
            <div class="todo-list">
                <For
                    each=move || todos.get()
                    key=|todo| todo.id
                    children=move |todo| {
                        // Rows are keyed by id, so follow later edits of the same todo
                        let id = todo.id;
                        let current = Memo::new(move |_| {
                            todos
                                .with(|list| list.iter().find(|t| t.id == id).cloned())
                                .unwrap_or_else(|| todo.clone())
                        });
                        view! {
                            <TodoItem
                                todo=current
                                on_toggle=on_toggle
                                on_delete=on_delete
                                on_update=on_update
                            />
                        }
                    }
                />
            </div>
        </Show>
    }
}
