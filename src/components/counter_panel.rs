//! Counter Panel Component
//!
//! The counter variants: value, - / Reset / + buttons, the derived readouts
//! and the recent history.

use leptos::prelude::*;
use tally_core::display;
use tally_core::{Config, Counter};

#[component]
pub fn CounterPanel(config: Config) -> impl IntoView {
    let counter = RwSignal::new(Counter::new(config.history_limit));
    let config = StoredValue::new(config);

    let descriptor = move || {
        let value = counter.with(|c| c.value());
        config.with_value(|cfg| display::describe(value, cfg))
    };

    view! {
        <aside class="counter-panel">
            <h2>"Counter"</h2>

            <div class="counter-display">
                {move || counter.with(|c| c.value())}
                " "
                {move || descriptor().emoji}
            </div>

            <div class="button-group">
                <button class="btn btn-decrement" on:click=move |_| counter.update(|c| { c.decrement(); })>
                    "-"
                </button>
                <button class="btn btn-reset" on:click=move |_| counter.update(|c| { c.reset(); })>
                    "Reset"
                </button>
                <button class="btn btn-increment" on:click=move |_| counter.update(|c| { c.increment(); })>
                    "+"
                </button>
            </div>

            <div class="counter-message">
                {move || descriptor().message.map(|msg| view! { <p>{msg}</p> })}
            </div>

            <dl class="counter-facts">
                <dt>"Parity"</dt>
                <dd>{move || descriptor().parity.as_str()}</dd>
                <dt>"Sign"</dt>
                <dd>{move || descriptor().sign.as_str()}</dd>
                <dt>"Prime"</dt>
                <dd>{move || if descriptor().prime { "yes" } else { "no" }}</dd>
                <dt>"Fibonacci"</dt>
                <dd>{move || descriptor().fibonacci.map(|f| f.to_string()).unwrap_or_else(|| "-".to_string())}</dd>
            </dl>

            <ol class="counter-history">
                {move || counter.with(|c| {
                    c.history().rev().map(|entry| {
                        let action = entry.action.as_str();
                        let value = entry.value;
                        view! { <li>{action} " → " {value}</li> }
                    }).collect_view()
                })}
            </ol>
        </aside>
    }
}
