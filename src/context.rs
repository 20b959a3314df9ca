//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use tally_core::{ItemRepository, ListManager};

use crate::storage::LocalStorageStore;

/// The to-do list, persisted to `localStorage`
pub type TodoManager = ListManager<ItemRepository<LocalStorageStore>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped by the list manager's observer after every change - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped by the list manager's observer after every change - write
    set_reload_trigger: WriteSignal<u32>,
    /// The list manager itself (not `Send`, so stored locally)
    manager: StoredValue<TodoManager, LocalStorage>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        manager: StoredValue<TodoManager, LocalStorage>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            manager,
        }
    }

    /// Trigger a re-render of everything reading the list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v = v.wrapping_add(1));
    }

    /// Read the list; the calling closure re-runs after each change
    pub fn with_manager<R>(&self, f: impl FnOnce(&TodoManager) -> R) -> R {
        let _ = self.reload_trigger.get();
        self.manager.with_value(f)
    }

    /// Run an operation on the list; observers fire before this returns
    pub fn update_manager<R>(&self, f: impl FnOnce(&mut TodoManager) -> R) -> Option<R> {
        let mut out = None;
        self.manager.update_value(|m| out = Some(f(m)));
        out
    }
}
