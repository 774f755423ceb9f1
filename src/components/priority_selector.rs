//! Priority Selector Component
//!
//! Reusable priority dropdown. Option values are the lowercase priority names.

use leptos::prelude::*;

use crate::models::Priority;

/// Priority dropdown for todos
#[component]
pub fn PrioritySelector(
    #[prop(into)] current: Signal<Priority>,
    #[prop(into)] on_change: Callback<Priority>,
) -> impl IntoView {
    view! {
        <select
            class=move || format!("priority-select {}", current.get().css_class())
            prop:value=move || current.get().as_str()
            on:change=move |ev| on_change.run(Priority::from_str(&event_target_value(&ev)))
        >
            {Priority::ALL.iter().map(|priority| {
                let priority = *priority;
                view! {
                    <option value=priority.as_str() selected=move || current.get() == priority>
                        {priority.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
