//! Confirm Dialog Component
//!
//! Modal yes/no dialog for destructive bulk actions.

use leptos::ev;
use leptos::prelude::*;

use crate::confirm::ConfirmGate;

/// Modal confirmation dialog
///
/// # Arguments
/// * `gate` - Open/closed state, opened by the caller
/// * `on_confirm` - Runs once when the user confirms; never on cancel or dismiss
#[component]
pub fn ConfirmDialog(
    gate: RwSignal<ConfirmGate>,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, default = "Confirm".to_string())] confirm_text: String,
    #[prop(into, default = "Cancel".to_string())] cancel_text: String,
) -> impl IntoView {
    let confirm = move || {
        if gate.try_update(|g| g.confirm()).unwrap_or(false) {
            on_confirm.run(());
        }
    };
    let dismiss = move || gate.update(|g| g.cancel());

    // Escape dismisses
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && gate.get_untracked().is_open() {
            dismiss();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        {move || gate.get().is_open().then(|| {
            let title = title.clone();
            let description = description.clone();
            let confirm_text = confirm_text.clone();
            let cancel_text = cancel_text.clone();
            view! {
                <div class="dialog-overlay" on:click=move |_| dismiss()>
                    <div
                        class="dialog-content"
                        role="dialog"
                        on:click=move |ev| ev.stop_propagation()
                    >
                        <div class="dialog-header">
                            <h2 class="dialog-title">{title}</h2>
                            <p class="dialog-description">{description}</p>
                        </div>
                        <div class="dialog-footer">
                            <button type="button" class="outline-btn" on:click=move |_| dismiss()>
                                {cancel_text}
                            </button>
                            <button type="button" class="danger-btn" on:click=move |_| confirm()>
                                {confirm_text}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
