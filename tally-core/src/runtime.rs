//! Native Runtime
//!
//! Host-side setup: rolling log files and the persisted list, laid out
//! under one data directory:
//!
//! ```text
//! <data_dir>/tally.db            (StoreBackend::Sqlite)
//! <data_dir>/store/todos.json    (StoreBackend::JsonFile)
//! <data_dir>/logs/Tally.log
//! ```

use std::path::{Path, PathBuf};

use rolling_logger::{LoggerError, LoggerOptions};

use crate::config::{Config, StoreBackend};
use crate::domain::{DomainError, DomainResult};
use crate::repository::{ItemRepository, JsonFileStore, KeyValueStore, SqliteStore, StoreError};
use crate::service::ListManager;

pub const APP_NAME: &str = "Tally";

/// List manager persisted in whichever store the config picks
pub type NativeListManager = ListManager<ItemRepository<NativeStore>>;

/// The store backends a native host can run on
pub enum NativeStore {
    Sqlite(SqliteStore),
    JsonFile(JsonFileStore),
}

impl NativeStore {
    pub fn open(data_dir: &Path, backend: StoreBackend) -> Result<Self, StoreError> {
        match backend {
            StoreBackend::Sqlite => Ok(Self::Sqlite(SqliteStore::open(db_path(data_dir))?)),
            StoreBackend::JsonFile => Ok(Self::JsonFile(JsonFileStore::open(store_dir(data_dir))?)),
        }
    }
}

impl KeyValueStore for NativeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Sqlite(store) => store.get(key),
            Self::JsonFile(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(store) => store.set(key, value),
            Self::JsonFile(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(store) => store.remove(key),
            Self::JsonFile(store) => store.remove(key),
        }
    }
}

/// Get database path inside the data directory
pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join("tally.db")
}

pub fn store_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("store")
}

pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

pub fn logger_options(config: &Config) -> LoggerOptions {
    LoggerOptions {
        max_bytes: config.log_max_bytes,
        max_files: config.log_max_files,
        buffer_lines: config.log_buffer_lines,
    }
}

/// Install the rolling logger; returns whether this call installed it
///
/// A logger that is already installed (by an earlier call or by the host)
/// is left alone.
pub fn init_logging(data_dir: &Path, config: &Config) -> Result<bool, LoggerError> {
    match rolling_logger::init_logger_with(log_dir(data_dir), APP_NAME, logger_options(config)) {
        Ok(_) => Ok(true),
        Err(LoggerError::AlreadyInitialized) | Err(LoggerError::Subscriber(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Open the configured store under `data_dir` and load the list from it
pub fn open_list(data_dir: &Path, config: &Config) -> DomainResult<NativeListManager> {
    std::fs::create_dir_all(data_dir).map_err(|e| DomainError::Storage(e.to_string()))?;
    let store = NativeStore::open(data_dir, config.store)?;
    Ok(ListManager::open(store, config))
}

/// Logging plus list, the way a desktop host starts up
pub fn start(data_dir: &Path, config: &Config) -> DomainResult<NativeListManager> {
    if let Err(e) = init_logging(data_dir, config) {
        eprintln!("[{}] logger init failed: {}", APP_NAME, e);
    }
    let manager = open_list(data_dir, config).map_err(|e| {
        let _ = rolling_logger::error(&format!("failed to open list: {}", e));
        e
    })?;
    let _ = rolling_logger::info(&format!("list ready with {} items", manager.len()));
    Ok(manager)
}
