//! Counter Entity
//!
//! The integer behind the counter panels, with a bounded history of the
//! most recent changes.

use std::collections::vec_deque::{self, VecDeque};

use serde::{Deserialize, Serialize};

/// What changed the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterAction::Increment => "increment",
            CounterAction::Decrement => "decrement",
            CounterAction::Reset => "reset",
        }
    }
}

/// One history row: the action and the value it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: CounterAction,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    value: i64,
    history: VecDeque<HistoryEntry>,
    history_limit: usize,
}

impl Counter {
    /// A zeroed counter keeping at most `history_limit` entries
    pub fn new(history_limit: usize) -> Self {
        Self {
            value: 0,
            history: VecDeque::with_capacity(history_limit),
            history_limit,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) -> i64 {
        self.apply(CounterAction::Increment)
    }

    pub fn decrement(&mut self) -> i64 {
        self.apply(CounterAction::Decrement)
    }

    pub fn reset(&mut self) -> i64 {
        self.apply(CounterAction::Reset)
    }

    pub fn apply(&mut self, action: CounterAction) -> i64 {
        self.value = match action {
            CounterAction::Increment => self.value.saturating_add(1),
            CounterAction::Decrement => self.value.saturating_sub(1),
            CounterAction::Reset => 0,
        };
        self.record(action);
        self.value
    }

    /// Recent changes, oldest first
    pub fn history(&self) -> vec_deque::Iter<'_, HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn record(&mut self, action: CounterAction) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry {
            action,
            value: self.value,
        });
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_decrement_reset() {
        let mut counter = Counter::default();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.decrement(), 1);
        assert_eq!(counter.reset(), 0);
        assert_eq!(counter.decrement(), -1);
        assert_eq!(counter.value(), -1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut counter = Counter::new(3);
        for _ in 0..5 {
            counter.increment();
        }

        let values: Vec<i64> = counter.history().map(|e| e.value).collect();
        assert_eq!(values, vec![3, 4, 5]);
        assert_eq!(counter.history_len(), 3);
    }

    #[test]
    fn test_history_records_actions() {
        let mut counter = Counter::new(5);
        counter.increment();
        counter.reset();

        let actions: Vec<CounterAction> = counter.history().map(|e| e.action).collect();
        assert_eq!(actions, vec![CounterAction::Increment, CounterAction::Reset]);
    }

    #[test]
    fn test_zero_limit_keeps_no_history() {
        let mut counter = Counter::new(0);
        counter.increment();
        assert_eq!(counter.history_len(), 0);
        assert_eq!(counter.value(), 1);
    }
}
