//! A min-priority queue with first-in-first-out ordering among items at the
//! same priority.

use std::collections::{BTreeMap, VecDeque};
use thiserror::Error;

/// Errors returned by [StableQueue] functions.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("empty queue")]
    Empty,
}

/// A min-priority queue that dequeues items with equal priority in the order
/// they were inserted.
///
/// Pending items are grouped into buckets keyed by priority: a [BTreeMap]
/// orders the pending priority values and each bucket is a [VecDeque] holding
/// that priority's items in arrival order. Extraction always takes the oldest
/// item in the bucket at the smallest pending priority. A bucket is removed
/// as soon as it becomes empty, so the map only ever contains priorities with
/// at least one pending item.
pub struct StableQueue<P: Ord, T> {
    entries: BTreeMap<P, VecDeque<T>>,
    items: usize,
}

impl<P: Ord, T> StableQueue<P, T> {
    /// Create a new, empty queue.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            items: 0,
        }
    }

    /// Returns the number of pending items.
    pub fn len(&self) -> usize {
        self.items
    }

    /// Returns `true` if no items are pending.
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Insert an item at the given priority, behind any items already pending
    /// at that priority.
    pub fn push(&mut self, priority: P, item: T) {
        self.entries.entry(priority).or_default().push_back(item);
        self.items += 1;
    }

    /// Borrow the next item to be dequeued (the oldest item at the smallest
    /// pending priority) without removing it.
    ///
    /// Returns [Error::Empty] if no items are pending. The reference is valid
    /// until the next mutating call.
    pub fn peek(&self) -> Result<&T, Error> {
        self.entries
            .first_key_value()
            .and_then(|(_, bucket)| bucket.front())
            .ok_or(Error::Empty)
    }

    /// Remove and return the item [Self::peek] would borrow.
    ///
    /// Returns [Error::Empty] if no items are pending, leaving the queue
    /// unchanged.
    pub fn pop(&mut self) -> Result<T, Error> {
        let mut entry = self.entries.first_entry().ok_or(Error::Empty)?;
        let bucket = entry.get_mut();
        // Buckets are never left empty, so the front must exist.
        let item = bucket.pop_front().ok_or(Error::Empty)?;
        if bucket.is_empty() {
            entry.remove();
        }
        self.items -= 1;
        Ok(item)
    }
}
