//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, files, browser storage, in-memory, etc.

use thiserror::Error;

use crate::domain::{DomainError, DomainResult, Entity};

/// Errors raised by key-value stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store rejected write for key '{key}': {reason}")]
    Rejected { key: String, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        DomainError::Storage(e.to_string())
    }
}

/// Flat string key-value storage
///
/// Writes are synchronous: once `set` returns `Ok`, the value is stored.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Whole-collection persistence for an entity type
///
/// The collection is always read and written in full.
pub trait Repository<T: Entity> {
    /// Load the persisted collection; an absent collection is empty
    fn load_all(&self) -> DomainResult<Vec<T>>;

    /// Replace the persisted collection
    fn save_all(&mut self, entities: &[T]) -> DomainResult<()>;

    /// Load at startup, rewriting the stored value if records had to be dropped
    fn load_repaired(&mut self) -> DomainResult<Vec<T>> {
        self.load_all()
    }
}
