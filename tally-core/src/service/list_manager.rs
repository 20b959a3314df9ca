//! List Manager
//!
//! Owns the item collection and the view filter. Every mutation is applied
//! in memory first, then the whole collection is written through the
//! repository, then observers are notified.
//!
//! A failed write never rolls the mutation back: the in-memory list stays
//! authoritative for the session. The failure is logged, kept as
//! `last_persist_error`, and sent to observers as `ListEvent::PersistFailed`.

use std::collections::HashSet;

use crate::config::Config;
use crate::domain::{DomainError, DomainResult, Filter, Item, ItemId};
use crate::repository::{ItemRepository, KeyValueStore, Repository};

use super::events::{ListEvent, SubscriptionId};

type Observer = Box<dyn FnMut(&ListEvent)>;

pub struct ListManager<R: Repository<Item>> {
    repo: R,
    items: Vec<Item>,
    filter: Filter,
    /// `None` once the counter has run past `u64::MAX`
    next_id: Option<u64>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    last_persist_error: Option<DomainError>,
}

impl<S: KeyValueStore> ListManager<ItemRepository<S>> {
    /// Manager over `store`, using the configured storage key
    pub fn open(store: S, config: &Config) -> Self {
        Self::new(ItemRepository::new(store, config.storage_key.clone()))
    }
}

impl<R: Repository<Item>> ListManager<R> {
    /// Load the persisted list; absent or unreadable data starts empty
    pub fn new(mut repo: R) -> Self {
        let items = match repo.load_repaired() {
            Ok(items) => {
                log::info!("[ListManager] loaded {} items", items.len());
                items
            }
            Err(e) => {
                log::warn!("[ListManager] ignoring persisted list: {}", e);
                Vec::new()
            }
        };

        let next_id = items
            .iter()
            .filter_map(|item| item.id.as_number())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        Self {
            repo,
            items,
            filter: Filter::default(),
            next_id,
            observers: Vec::new(),
            next_subscription: 0,
            last_persist_error: None,
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new item; blank text is ignored and returns `None`
    pub fn add(&mut self, text: &str) -> Option<ItemId> {
        let text = Item::normalize_text(text)?;
        let id = self.fresh_id();
        self.items.push(Item::with_id(id.clone(), text));
        self.commit(ListEvent::ItemAdded(id.clone()));
        Some(id)
    }

    /// Remove the item with `id`; returns whether one was removed
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let removed = self.items.remove(index);
        self.commit(ListEvent::ItemRemoved(removed.id));
        true
    }

    /// Flip completion on the item with `id`; returns the new state
    pub fn toggle(&mut self, id: &ItemId) -> Option<bool> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        item.completed = !item.completed;
        let completed = item.completed;
        self.commit(ListEvent::ItemToggled(id.clone(), completed));
        Some(completed)
    }

    /// Remove every completed item; returns how many went
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();
        if removed > 0 {
            self.commit(ListEvent::CompletedCleared(removed));
        }
        removed
    }

    // ========================
    // Filter
    // ========================

    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.notify(&ListEvent::FilterChanged(filter));
        }
    }

    /// Set the filter by name; unknown names fail and leave it unchanged
    pub fn set_filter_str(&mut self, name: &str) -> DomainResult<()> {
        let filter = name.parse::<Filter>()?;
        self.set_filter(filter);
        Ok(())
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    // ========================
    // Queries
    // ========================

    /// Items matching the current filter, in insertion order
    ///
    /// The iterator is `Clone`, so a view can walk it more than once.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + Clone + '_ {
        let filter = self.filter;
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Every item, in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.remaining_count()
    }

    /// Drives whether a "clear completed" control is shown
    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|item| item.completed)
    }

    /// Error from the most recent write, cleared by the next successful one
    pub fn last_persist_error(&self) -> Option<&DomainError> {
        self.last_persist_error.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    // ========================
    // Observers
    // ========================

    /// Call `observer` after every operation that changes state
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ListEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether the subscription existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    // ========================
    // Internals
    // ========================

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    fn fresh_id(&mut self) -> ItemId {
        while let Some(candidate) = self.next_id {
            self.next_id = candidate.checked_add(1);
            let id = ItemId::Number(candidate);
            if self.position(&id).is_none() {
                return id;
            }
        }

        // Counter exhausted: reuse the smallest free number
        let used: HashSet<u64> = self.items.iter().filter_map(|item| item.id.as_number()).collect();
        let free = (1..=u64::MAX).find(|n| !used.contains(n)).unwrap_or_default();
        ItemId::Number(free)
    }

    /// Persist the full collection, then tell observers what happened
    fn commit(&mut self, event: ListEvent) {
        let failure = self.persist();
        self.notify(&event);
        if let Some(message) = failure {
            self.notify(&ListEvent::PersistFailed(message));
        }
    }

    fn persist(&mut self) -> Option<String> {
        match self.repo.save_all(&self.items) {
            Ok(()) => {
                self.last_persist_error = None;
                None
            }
            Err(e) => {
                log::error!(
                    "[ListManager] failed to persist {} items, keeping in-memory state: {}",
                    self.items.len(),
                    e
                );
                let message = e.to_string();
                self.last_persist_error = Some(e);
                Some(message)
            }
        }
    }

    fn notify(&mut self, event: &ListEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }
}
