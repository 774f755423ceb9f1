//! Due Date Picker Component
//!
//! Native date input limited to today or later, with a clear button.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dates;

#[component]
pub fn DueDatePicker(
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    #[prop(into)] on_change: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="due-date-picker">
            <label class="due-date-btn">
                <span class="due-date-icon">"📅"</span>
                <span>{move || dates::picker_label(value.get())}</span>
                <input
                    type="date"
                    min=move || dates::to_input(Some(ctx.today.get()))
                    prop:value=move || dates::to_input(value.get())
                    on:change=move |ev| on_change.run(dates::parse_input(&event_target_value(&ev)))
                />
            </label>
            <Show when=move || value.get().is_some()>
                <button type="button" class="ghost-btn small" on:click=move |_| on_change.run(None)>
                    "Clear Date"
                </button>
            </Show>
        </div>
    }
}
