//! Service Layer
//!
//! State owners that front ends drive directly.

mod events;
mod list_manager;

pub use events::{ListEvent, SubscriptionId};
pub use list_manager::ListManager;
