//! Observable state cells
//!
//! A `StateCell` is an in-process, single-slot value container with change
//! notification: one writer side owned by a pipeline, read by exactly one
//! presentation layer. Updates are atomic replacements of the whole value,
//! so readers never observe a partial write.
//!
//! Background computations publish through a generation guard: each
//! computation takes a generation from `next_generation` before it starts,
//! and `publish_if_current` drops any result whose generation is older than
//! the newest one handed out. Overlapping computations can therefore finish
//! in any order without a stale result replacing a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::watch;

/// Single-slot observable value container
pub struct StateCell<T> {
    tx: watch::Sender<T>,
    /// Newest generation handed out to a computation
    submitted: AtomicU64,
    /// Generation of the value currently in the cell
    published: Mutex<u64>,
}

impl<T: Clone> StateCell<T> {
    /// Create a cell holding `initial`
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            tx,
            submitted: AtomicU64::new(0),
            published: Mutex::new(0),
        }
    }

    /// Clone of the current value
    pub fn current(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Subscribe to value changes
    ///
    /// The receiver starts at the current value; `changed().await` resolves
    /// on each subsequent publish.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Replace the value unconditionally
    pub fn publish(&self, value: T) {
        let generation = self.submitted.fetch_add(1, Ordering::SeqCst) + 1;
        let mut published = self.published.lock();
        *published = generation;
        self.tx.send_replace(value);
    }

    /// Reserve a generation for a background computation
    ///
    /// Call this before spawning the computation, on the submitting task, so
    /// that submission order is what the guard enforces.
    pub fn next_generation(&self) -> u64 {
        self.submitted.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish the result of the computation tagged `generation`
    ///
    /// Returns false, leaving the cell untouched, when a newer computation
    /// has been submitted or has already published.
    pub fn publish_if_current(&self, generation: u64, value: T) -> bool {
        let mut published = self.published.lock();
        if generation < self.submitted.load(Ordering::SeqCst) || generation <= *published {
            return false;
        }
        *published = generation;
        self.tx.send_replace(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_returns_initial_value() {
        let cell = StateCell::new(7u32);
        assert_eq!(cell.current(), 7);
    }

    #[test]
    fn test_publish_replaces_value() {
        let cell = StateCell::new(vec![1, 2]);
        cell.publish(vec![3]);
        assert_eq!(cell.current(), vec![3]);
    }

    #[tokio::test]
    async fn test_subscriber_sees_changes() {
        let cell = StateCell::new(0u32);
        let mut rx = cell.subscribe();
        assert_eq!(*rx.borrow(), 0);

        cell.publish(5);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 5);
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let cell = StateCell::new(0u32);
        let first = cell.next_generation();
        let second = cell.next_generation();

        // The newer computation finishes first.
        assert!(cell.publish_if_current(second, 2));
        assert_eq!(cell.current(), 2);

        // The older one completes late and must not win.
        assert!(!cell.publish_if_current(first, 1));
        assert_eq!(cell.current(), 2);
    }

    #[test]
    fn test_in_order_completions_both_publish() {
        let cell = StateCell::new(0u32);
        let first = cell.next_generation();
        assert!(cell.publish_if_current(first, 1));

        let second = cell.next_generation();
        assert!(cell.publish_if_current(second, 2));
        assert_eq!(cell.current(), 2);
    }

    #[test]
    fn test_newer_submission_invalidates_in_flight_result() {
        let cell = StateCell::new(0u32);
        let first = cell.next_generation();
        // A newer computation is submitted before the first publishes.
        let _second = cell.next_generation();
        assert!(!cell.publish_if_current(first, 1));
        assert_eq!(cell.current(), 0);
    }

    #[test]
    fn test_unconditional_publish_supersedes_reserved_generation() {
        let cell = StateCell::new(0u32);
        let reserved = cell.next_generation();
        cell.publish(9);
        assert!(!cell.publish_if_current(reserved, 1));
        assert_eq!(cell.current(), 9);
    }
}
