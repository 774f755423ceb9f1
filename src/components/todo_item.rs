//! Todo Item Component
//!
//! One todo card. Switches between a read-only row and an inline editor.

use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::components::{DueDatePicker, PrioritySelector};
use crate::context::use_app_context;
use crate::dates::{self, DueStatus};
use crate::editor::{EditKey, EditState};
use crate::models::{Priority, Todo, TodoDraft, TodoId};

#[component]
pub fn TodoItem(
    #[prop(into)] todo: Signal<Todo>,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_delete: Callback<TodoId>,
    #[prop(into)] on_update: Callback<(TodoId, TodoDraft)>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = todo.get_untracked().id;

    let edit_state = RwSignal::new(EditState::default());
    let (leaving, set_leaving) = signal(false);

    let begin_edit = move || {
        ctx.refresh_today();
        edit_state.update(|s| s.begin(&todo.get_untracked()));
    };

    let save = move || {
        match edit_state.try_update(|s| s.commit()).flatten() {
            Some(patch) => on_update.run((id, patch)),
            None => log::debug!("[ITEM] Rejected blank edit for {}", id),
        }
    };

    let cancel = move || edit_state.update(|s| s.cancel());

    // Let the exit transition play before the store drops the item
    let delete = move || {
        set_leaving.set(true);
        let delay = ctx.config(|c| c.exit_transition_ms);
        if delay == 0 {
            on_delete.run(id);
        } else {
            Timeout::new(delay, move || on_delete.run(id)).forget();
        }
    };

    let set_due_date = move |date: Option<NaiveDate>| {
        let today = ctx.today.get_untracked();
        if let Err(err) = edit_state.try_update(|s| s.set_due_date(date, today)).unwrap_or(Ok(())) {
            log::debug!("[ITEM] {}", err);
        }
    };

    let card_class = move || {
        let t = todo.get();
        let mut class = format!("todo-item card {}", t.priority.css_class());
        if t.completed {
            class.push_str(" completed");
        }
        if leaving.get() {
            class.push_str(" leaving");
        }
        class
    };

    let editor = move || {
        let input_ref = NodeRef::<html::Input>::new();
        // Focus the text field once it is mounted
        Effect::new(move |_| {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        });

        view! {
            <div class="todo-editor">
                <input
                    type="text"
                    class="todo-edit-input"
                    node_ref=input_ref
                    prop:value=move || edit_state.with(|s| s.draft().map(|d| d.text.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        edit_state.update(|s| s.set_text(text));
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match EditKey::from_key(&ev.key()) {
                            Some(EditKey::Commit) => save(),
                            Some(EditKey::Cancel) => cancel(),
                            None => {}
                        }
                    }
                />
                <div class="todo-editor-options">
                    <PrioritySelector
                        current=Signal::derive(move || {
                            edit_state.with(|s| s.draft().map(|d| d.priority).unwrap_or_default())
                        })
                        on_change=move |priority: Priority| edit_state.update(|s| s.set_priority(priority))
                    />
                    <DueDatePicker
                        value=Signal::derive(move || edit_state.with(|s| s.draft().and_then(|d| d.due_date)))
                        on_change=set_due_date
                    />
                </div>
                <div class="todo-editor-actions">
                    <button type="button" class="small" on:click=move |_| save()>"✓ Save"</button>
                    <button type="button" class="outline-btn small" on:click=move |_| cancel()>"✗ Cancel"</button>
                </div>
            </div>
        }
    };

    let details = move || {
        let t = todo.get();
        let today = ctx.today.get();
        view! {
            <div class="todo-details">
                <p class="todo-text">{t.text.clone()}</p>
                <div class="todo-meta">
                    <span class="todo-priority">"⚑ " {t.priority.label()}</span>
                    {t.due_date.map(|due: NaiveDate| view! {
                        <span class=format!("todo-due {}", DueStatus::of(due, today).css_class())>
                            "📅 " {dates::format_due(due, today)}
                        </span>
                    })}
                </div>
            </div>
        }
    };

    view! {
        <div class=card_class>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=move || todo.get().completed
                on:change=move |_| on_toggle.run(id)
            />

            <div class="todo-body">
                <Show when=move || edit_state.with(|s| s.is_editing()) fallback=details>
                    {editor}
                </Show>
            </div>

            <Show when=move || !edit_state.with(|s| s.is_editing())>
                <div class="todo-actions">
                    <button type="button" class="ghost-btn icon" title="Edit" on:click=move |_| begin_edit()>
                        "✎"
                    </button>
                    <button type="button" class="ghost-btn icon danger" title="Delete" on:click=move |_| delete()>
                        "🗑"
                    </button>
                </div>
            </Show>
        </div>
    }
}
