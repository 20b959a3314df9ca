//! Repository Layer
//!
//! Key-value stores and the persisted item layout on top of them.

mod traits;
mod memory_store;
mod item_repo;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
mod sqlite_store;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStore, Repository, StoreError};
pub use memory_store::MemoryStore;
pub use item_repo::{decode_items, encode_items, ItemRepository};

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::JsonFileStore;
#[cfg(not(target_arch = "wasm32"))]
pub use sqlite_store::SqliteStore;
