//! Todo Input Component
//!
//! Form for creating new todos with priority and due date options.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::{DueDatePicker, PrioritySelector};
use crate::composer::Composer;
use crate::context::use_app_context;
use crate::models::{Priority, TodoDraft};

/// Form for creating new todos
#[component]
pub fn TodoInput(
    #[prop(into)] on_add: Callback<TodoDraft>,
) -> impl IntoView {
    let ctx = use_app_context();
    let composer = RwSignal::new(Composer::new(ctx.config(|c| c.default_priority)));

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match composer.try_update(|c| c.submit()) {
            Some(Ok(draft)) => {
                log::debug!("[INPUT] Submitting {:?}", draft.text);
                on_add.run(draft);
            }
            Some(Err(err)) => log::debug!("[INPUT] Submit ignored: {}", err),
            None => {}
        }
    };

    let toggle_advanced = move |_| {
        ctx.refresh_today();
        composer.update(|c| c.toggle_advanced());
    };

    let set_due_date = move |date: Option<NaiveDate>| {
        let today = ctx.today.get_untracked();
        if let Some(Err(err)) = composer.try_update(|c| c.set_due_date(date, today)) {
            log::debug!("[INPUT] {}", err);
        }
    };

    view! {
        <form class="todo-input card" on:submit=add_todo>
            <div class="todo-input-row">
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || composer.with(|c| c.text.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        composer.update(|c| c.text = text);
                    }
                />
                <button
                    type="button"
                    title="Priority and due date"
                    class=move || if composer.with(|c| c.show_advanced) { "icon-btn active" } else { "icon-btn" }
                    on:click=toggle_advanced
                >
                    "⚑"
                </button>
                <button type="submit" disabled=move || !composer.with(|c| c.can_submit())>
                    "+ Add"
                </button>
            </div>

            <Show when=move || composer.with(|c| c.show_advanced)>
                <div class="todo-input-advanced">
                    <PrioritySelector
                        current=Signal::derive(move || composer.with(|c| c.priority))
                        on_change=move |priority: Priority| composer.update(|c| c.priority = priority)
                    />
                    <DueDatePicker
                        value=Signal::derive(move || composer.with(|c| c.due_date))
                        on_change=set_due_date
                    />
                </div>
            </Show>
        </form>
    }
}
