//! In-memory record of accepted transitions.
//!
//! Only transitions a machine actually applied are recorded. The history
//! lives as long as the machine and is never written anywhere by this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// One accepted move between identities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<I> {
    /// Identity the machine left
    pub from: I,
    /// Identity the machine entered
    pub to: I,
    /// When the machine adopted the new state
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of accepted transitions.
///
/// A history built with [`StateHistory::with_limit`] keeps only the most
/// recent records and drops the oldest once the limit is reached.
///
/// # Example
///
/// ```rust
/// use automaton::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.push(TransitionRecord { from: "pending", to: "authorized", timestamp: Utc::now() });
/// history.push(TransitionRecord { from: "authorized", to: "captured", timestamp: Utc::now() });
///
/// assert_eq!(history.path(), vec![&"pending", &"authorized", &"captured"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<I> {
    records: VecDeque<TransitionRecord<I>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<I> Default for StateHistory<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> StateHistory<I> {
    /// Unbounded history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            limit: None,
        }
    }

    /// History retaining at most `limit` records. A limit of zero records
    /// nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the limit, dropping the oldest records beyond it.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.evict();
    }

    pub fn push(&mut self, record: TransitionRecord<I>) {
        if self.limit == Some(0) {
            return;
        }
        self.records.push_back(record);
        self.evict();
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Identities visited, starting with the oldest retained record's origin.
    pub fn path(&self) -> Vec<&I> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        path.extend(self.records.iter().map(|record| &record.to));
        path
    }

    /// Time between the oldest and newest retained transition.
    ///
    /// `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord<I>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn evict(&mut self) {
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }
}
