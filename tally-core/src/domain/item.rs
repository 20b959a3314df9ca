//! Item Entity
//!
//! A single to-do entry: identity, text and completion flag.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Item identifier
///
/// New items always get numeric ids. Persisted lists written by other front
/// ends may carry string ids, which are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl ItemId {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            ItemId::Number(n) => Some(*n),
            ItemId::Text(_) => None,
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Item text content (trimmed, never blank)
    pub text: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item with a numeric id
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self::with_id(ItemId::Number(id), text)
    }

    pub fn with_id(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Trim user input; `None` when nothing is left
    pub fn normalize_text(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
