//! Log Panel Component
//!
//! Collapsible footer showing the records kept by the console logger.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(console_logger::recent());

    let toggle = move |_| {
        let now_open = !open.get();
        if now_open {
            refresh();
        }
        set_open.set(now_open);
    };

    view! {
        <footer class="log-panel">
            <button type="button" class="ghost-btn small" on:click=toggle>
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <button type="button" class="ghost-btn small" on:click=move |_| refresh()>"Refresh"</button>
                <pre class="log-lines">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No log records".to_string() } else { lines.join("\n") }
                    }}
                </pre>
            </Show>
        </footer>
    }
}
