//! Todo Panel Component
//!
//! Form, filter bar, visible items and the footer controls.

use leptos::prelude::*;
use tally_core::ItemId;

use crate::components::{FilterBar, NewItemForm, TodoItem};
use crate::context::AppContext;

#[component]
pub fn TodoPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let visible_items = move || ctx.with_manager(|m| m.visible_items().map(|item| item.id.clone()).collect::<Vec<ItemId>>());
    let remaining = move || ctx.with_manager(|m| m.remaining_count());
    let has_completed = move || ctx.with_manager(|m| m.has_completed());
    let persist_error = move || ctx.with_manager(|m| m.last_persist_error().map(|e| e.to_string()));

    view! {
        <section class="todo-panel">
            <NewItemForm />
            <FilterBar />

            <ul class="todo-list">
                {move || visible_items().into_iter().map(|id| view! {
                    <TodoItem id=id />
                }).collect_view()}
            </ul>

            <footer class="todo-footer">
                <span class="remaining">{move || {
                    let n = remaining();
                    format!("{} item{} left", n, if n == 1 { "" } else { "s" })
                }}</span>

                {move || has_completed().then(|| view! {
                    <button type="button" class="clear-completed" on:click=move |_| {
                        ctx.update_manager(|m| m.clear_completed());
                    }>
                        "Clear completed"
                    </button>
                })}
            </footer>

            {move || persist_error().map(|msg| view! {
                <p class="persist-error">"Changes are not being saved: " {msg}</p>
            })}
        </section>
    }
}
