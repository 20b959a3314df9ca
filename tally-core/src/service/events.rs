//! List Events
//!
//! What observers of a `ListManager` are told after each operation.

use crate::domain::{Filter, ItemId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    ItemAdded(ItemId),
    ItemRemoved(ItemId),
    /// Carries the new completion state
    ItemToggled(ItemId, bool),
    /// Number of items removed
    CompletedCleared(usize),
    FilterChanged(Filter),
    /// The write after a mutation failed; the in-memory list is kept
    PersistFailed(String),
}

/// Handle returned by `ListManager::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

