//! Configuration
//!
//! Every field has a default, so a host can pass a partial JSON object
//! (or nothing at all).

use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

/// Key the item list is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Where a native host keeps the list; the browser always uses `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// `kv` table in `<data_dir>/tally.db`
    #[default]
    Sqlite,
    /// `<data_dir>/store/<key>.json`
    JsonFile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed key for the persisted list
    pub storage_key: String,
    pub store: StoreBackend,
    /// Entries kept in the counter history
    pub history_limit: usize,
    /// Counter values above this show the "getting big" message
    pub big_threshold: i64,
    /// Rotate the log file past this size
    pub log_max_bytes: u64,
    /// Log files kept on disk
    pub log_max_files: usize,
    /// Log lines kept in memory
    pub log_buffer_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            store: StoreBackend::default(),
            history_limit: 10,
            big_threshold: 10,
            log_max_bytes: 1024 * 1024,
            log_max_files: 5,
            log_buffer_lines: 200,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON object; unknown keys are ignored
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.big_threshold, 10);
        assert_eq!(config.store, StoreBackend::Sqlite);
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(r#"{"history_limit": 3, "theme": "dark"}"#).unwrap();
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);

        let config = Config::from_json(r#"{"store": "json_file"}"#).unwrap();
        assert_eq!(config.store, StoreBackend::JsonFile);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Config::from_json("history_limit=3"),
            Err(DomainError::Serialization(_))
        ));
    }
}
