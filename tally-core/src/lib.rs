//! Tally Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Key-value stores and the persisted item layout
//! - service: The list manager driving add/toggle/remove and persistence
//! - display: Pure derivations for the counter panels
//! - runtime: Native host wiring (logger + SQLite store)

pub mod config;
pub mod display;
pub mod domain;
pub mod repository;
pub mod service;

#[cfg(not(target_arch = "wasm32"))]
pub mod runtime;

pub use config::{Config, StoreBackend};
pub use domain::{Counter, CounterAction, DomainError, DomainResult, Filter, Item, ItemId};
pub use repository::{ItemRepository, KeyValueStore, MemoryStore, Repository, StoreError};
pub use service::{ListEvent, ListManager, SubscriptionId};
