//! UI Components
//!
//! Reusable Leptos components.

mod counter_panel;
mod filter_bar;
mod new_item_form;
mod todo_item;
mod todo_panel;

pub use counter_panel::CounterPanel;
pub use filter_bar::FilterBar;
pub use new_item_form::NewItemForm;
pub use todo_item::TodoItem;
pub use todo_panel::TodoPanel;
