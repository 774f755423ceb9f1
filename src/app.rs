//! Todo Web Frontend App
//!
//! Root component. Owns the store and wires child callbacks to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ConfirmDialog, FilterControls, Header, LogPanel, TodoInput, TodoListView};
use crate::config::UiConfig;
use crate::confirm::ConfirmGate;
use crate::context::AppContext;
use crate::models::{FilterMode, TodoDraft, TodoId};
use crate::store::{
    store_add_todo, store_clear_completed, store_counts, store_delete_todo, store_set_filter_mode,
    store_set_search_term, store_toggle_todo, store_update_todo, store_visible_todos, AppState,
    AppStateStoreFields, AppStore,
};

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let clear_title = config.clear_completed_title.clone();
    let clear_description = config.clear_completed_description.clone();
    let confirm_text = config.confirm_text.clone();
    let cancel_text = config.cancel_text.clone();

    // Provide context to all children
    provide_context(AppContext::new(config));
    let store: AppStore = Store::new(AppState::default());

    let visible = Memo::new(move |_| store_visible_todos(&store));
    let counts = Memo::new(move |_| store_counts(&store));
    let clear_gate = RwSignal::new(ConfirmGate::default());

    Effect::new(move |_| {
        let counts = counts.get();
        log::debug!("[APP] {} active, {} completed", counts.active, counts.completed);
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <Header counts=counts />

                <TodoInput on_add=move |draft: TodoDraft| {
                    store_add_todo(&store, draft);
                } />

                <FilterControls
                    filter=Signal::derive(move || store.filter().get())
                    on_filter_change=move |mode: FilterMode| store_set_filter_mode(&store, mode)
                    search_term=Signal::derive(move || store.search_term().get())
                    on_search_change=move |term: String| store_set_search_term(&store, term)
                    on_clear_completed=move |_: ()| clear_gate.update(|g| g.open())
                    completed_count=Signal::derive(move || counts.get().completed)
                />

                <TodoListView
                    todos=visible
                    on_toggle=move |id: TodoId| store_toggle_todo(&store, id)
                    on_delete=move |id: TodoId| store_delete_todo(&store, id)
                    on_update=move |(id, patch): (TodoId, TodoDraft)| store_update_todo(&store, id, patch)
                />

                <LogPanel />
            </main>

            <ConfirmDialog
                gate=clear_gate
                title=clear_title
                description=clear_description
                confirm_text=confirm_text
                cancel_text=cancel_text
                on_confirm=move |_: ()| {
                    store_clear_completed(&store);
                }
            />
        </div>
    }
}
