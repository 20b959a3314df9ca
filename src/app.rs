//! Tally Frontend App
//!
//! Main application component: counter on the left, to-do list in the
//! middle.

use leptos::prelude::*;
use tally_core::{Config, ListManager};

use crate::components::{CounterPanel, TodoPanel};
use crate::context::AppContext;
use crate::storage::LocalStorageStore;

#[component]
pub fn App() -> impl IntoView {
    let config = Config::default();

    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let manager = StoredValue::new_local(ListManager::open(LocalStorageStore::open(), &config));

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), manager);
    provide_context(ctx);

    // Re-render whenever the list reports a change
    ctx.update_manager(|m| {
        m.subscribe(move |event| {
            log::debug!("[APP] list event: {:?}", event);
            ctx.reload();
        })
    });

    view! {
        <div class="app-layout">
            <CounterPanel config=config />

            <main class="main-content">
                <h1>"Tally"</h1>
                <TodoPanel />
            </main>
        </div>
    }
}
