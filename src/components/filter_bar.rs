//! Filter Bar Component

use leptos::prelude::*;
use tally_core::Filter;

use crate::context::AppContext;

/// Three mutually exclusive filter buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            {Filter::ALL.into_iter().map(|filter| {
                let is_selected = move || ctx.with_manager(|m| m.filter() == filter);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| {
                            ctx.update_manager(|m| m.set_filter(filter));
                        }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
