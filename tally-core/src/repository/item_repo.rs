//! Item Repository
//!
//! Owns the persisted layout: one key holding a JSON array of
//! `{ "id", "text", "completed" }` records.

use std::collections::HashSet;

use crate::domain::{DomainResult, Item};
use super::traits::{KeyValueStore, Repository};

/// Item list persisted under a single fixed key
pub struct ItemRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ItemRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

}

impl<S: KeyValueStore> Repository<Item> for ItemRepository<S> {
    fn load_all(&self) -> DomainResult<Vec<Item>> {
        match self.store.get(&self.key)? {
            Some(raw) => decode_items(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn load_repaired(&mut self) -> DomainResult<Vec<Item>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let (items, dropped) = decode_counting(&raw)?;
        if dropped > 0 {
            match self.save_all(&items) {
                Ok(()) => log::info!(
                    "[ItemRepository] rewrote '{}' without {} dropped records",
                    self.key,
                    dropped
                ),
                Err(e) => log::warn!("[ItemRepository] could not rewrite '{}': {}", self.key, e),
            }
        }
        Ok(items)
    }

    fn save_all(&mut self, items: &[Item]) -> DomainResult<()> {
        let raw = encode_items(items)?;
        self.store.set(&self.key, &raw)?;
        Ok(())
    }
}

pub fn encode_items(items: &[Item]) -> DomainResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse a persisted list
///
/// Anything that is not an array of item records is an error. Records that
/// would break collection invariants (blank text, repeated id) are dropped
/// with a warning; the first occurrence of an id wins.
pub fn decode_items(raw: &str) -> DomainResult<Vec<Item>> {
    decode_counting(raw).map(|(items, _)| items)
}

/// Decoded items plus the number of records dropped
fn decode_counting(raw: &str) -> DomainResult<(Vec<Item>, usize)> {
    let parsed: Vec<Item> = serde_json::from_str(raw)?;
    let total = parsed.len();

    let mut seen = HashSet::with_capacity(parsed.len());
    let mut items = Vec::with_capacity(parsed.len());
    for item in parsed {
        if item.text.trim().is_empty() {
            log::warn!("[ItemRepository] dropping item {} with blank text", item.id);
            continue;
        }
        if !seen.insert(item.id.clone()) {
            log::warn!("[ItemRepository] dropping duplicate item id {}", item.id);
            continue;
        }
        items.push(item);
    }
    let dropped = total - items.len();
    Ok((items, dropped))
}
