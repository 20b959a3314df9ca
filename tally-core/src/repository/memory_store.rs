//! In-Memory Store
//!
//! Process-local map. Reads and writes can be switched off to simulate a
//! store that refuses them (storage disabled, full quota).

use std::collections::HashMap;

use super::traits::{KeyValueStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_reads: bool,
    reject_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with one entry already present
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every following `get` fail with `Unavailable`
    pub fn set_reject_reads(&mut self, reject: bool) {
        self.reject_reads = reject;
    }

    /// Make every following `set`/`remove` fail
    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn check_writable(&self, key: &str) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::Rejected {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.reject_reads {
            return Err(StoreError::Unavailable(format!("cannot read '{}'", key)));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.entries.remove(key);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert_eq!(store.write_count(), 3);
    }

    #[test]
    fn test_rejected_writes_leave_data() {
        let mut store = MemoryStore::with_entry("k", "old");
        store.set_reject_writes(true);

        assert!(matches!(store.set("k", "new"), Err(StoreError::Rejected { .. })));
        assert_eq!(store.get("k").unwrap(), Some("old".to_string()));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_rejected_reads() {
        let mut store = MemoryStore::with_entry("k", "v");
        store.set_reject_reads(true);
        assert!(matches!(store.get("k"), Err(StoreError::Unavailable(_))));

        store.set_reject_reads(false);
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }
}
