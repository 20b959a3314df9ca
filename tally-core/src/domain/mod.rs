//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod counter;
mod entity;
mod filter;
mod item;

pub use counter::{Counter, CounterAction, HistoryEntry};
pub use entity::{DomainError, DomainResult, Entity};
pub use filter::Filter;
pub use item::{Item, ItemId};
