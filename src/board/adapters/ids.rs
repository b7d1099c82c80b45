//! Identifier generators.

use crate::board::ports::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Generates random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Generates `prefix` followed by a monotonically increasing counter.
///
/// # Examples
///
/// ```
/// use cardwall::board::{adapters::ids::SequentialIdGenerator, ports::IdGenerator};
///
/// let ids = SequentialIdGenerator::with_prefix("card-");
/// assert_eq!(ids.next_id(), "card-1");
/// assert_eq!(ids.next_id(), "card-2");
/// ```
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator producing `1`, `2`, `3`, ...
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator producing `prefix1`, `prefix2`, ...
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Creates a generator whose first identifier is `start + 1`.
    ///
    /// Used when resuming a board whose identifiers came from a counter.
    #[must_use]
    pub fn starting_after(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(start),
        }
    }
}

/// The counter saturates at `u64::MAX`. Once there, every call returns the
/// same identifier, which the store rejects as a duplicate instead of
/// wrapping back to reused values.
impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let previous = self
            .counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(current.saturating_add(1))
            })
            .unwrap_or_else(|current| current);
        let value = previous.saturating_add(1);
        format!("{}{value}", self.prefix)
    }
}
