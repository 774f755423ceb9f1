//! Filter Controls Component
//!
//! Search box, filter mode buttons and the clear-completed trigger.

use leptos::prelude::*;

use crate::models::FilterMode;

#[component]
pub fn FilterControls(
    #[prop(into)] filter: Signal<FilterMode>,
    #[prop(into)] on_filter_change: Callback<FilterMode>,
    #[prop(into)] search_term: Signal<String>,
    #[prop(into)] on_search_change: Callback<String>,
    #[prop(into)] on_clear_completed: Callback<()>,
    #[prop(into)] completed_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="filter-controls">
            <div class="search-box">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search todos..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| on_search_change.run(event_target_value(&ev))
                />
            </div>

            <div class="filter-buttons">
                {FilterMode::ALL.iter().map(|mode| {
                    let mode = *mode;
                    view! {
                        <button
                            type="button"
                            class=move || if filter.get() == mode { "filter-btn small active" } else { "filter-btn small" }
                            on:click=move |_| on_filter_change.run(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}

                <Show when=move || { completed_count.get() > 0 }>
                    <button
                        type="button"
                        class="danger-btn small"
                        on:click=move |_| on_clear_completed.run(())
                    >
                        "🗑 Clear Completed"
                    </button>
                </Show>
            </div>
        </div>
    }
}
