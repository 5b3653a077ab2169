//! A priority queue that maintains first-in-first-out ordering among items
//! with equal priority.
//!
//! A binary-heap priority queue makes no promise about the relative order of
//! items that compare equal. [StableQueue] does: items sharing a priority
//! value are dequeued in exactly the order they were inserted, while items at
//! different priorities are dequeued smallest-priority-first.
//!
//! # Example
//!
//! ```rust
//! use stable_queue::StableQueue;
//!
//! let mut queue = StableQueue::new();
//! queue.push(1, "second");
//! queue.push(1, "third");
//! queue.push(0, "first");
//!
//! assert_eq!(queue.pop(), Ok("first"));
//! assert_eq!(queue.pop(), Ok("second"));
//! assert_eq!(queue.pop(), Ok("third"));
//! assert!(queue.is_empty());
//! ```

mod queue;
pub use queue::{Error, StableQueue};
