//! Header Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::TodoCounts;

/// Title with active / completed totals
#[component]
pub fn Header(
    #[prop(into)] counts: Signal<TodoCounts>,
) -> impl IntoView {
    let ctx = use_app_context();
    let title = ctx.config(|c| c.title.clone());

    view! {
        <header class="app-header">
            <span class="app-header-icon">"☑"</span>
            <div>
                <h1>{title}</h1>
                <p class="todo-count">
                    {move || {
                        let counts = counts.get();
                        format!("{} active, {} completed", counts.active, counts.completed)
                    }}
                </p>
            </div>
        </header>
    }
}
