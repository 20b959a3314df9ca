//! Todo Item Component
//!
//! Individual row in the list.

use leptos::prelude::*;
use tally_core::ItemId;

use crate::context::AppContext;

/// A single item row: checkbox, text, delete
#[component]
pub fn TodoItem(id: ItemId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = StoredValue::new(id);
    let item = move || ctx.with_manager(|m| id.with_value(|id| m.get(id).cloned()));

    move || {
        item().map(|item| {
            let completed = item.completed;
            let row_class = if completed { "item-row completed" } else { "item-row" };

            view! {
                <li class=row_class>
                    <input
                        type="checkbox"
                        checked=completed
                        on:change=move |_| {
                            ctx.update_manager(|m| id.with_value(|id| m.toggle(id)));
                        }
                    />

                    <span class="item-text">{item.text}</span>

                    <button class="delete-btn" on:click=move |_| {
                        ctx.update_manager(|m| id.with_value(|id| m.remove(id)));
                    }>"×"</button>
                </li>
            }
        })
    }
}
