//! Traveler count state
//!
//! Tracks how many people are travelling. The count starts at 1, never goes
//! below 1, and has no upper bound. Subscribers are notified on change only.

use tokio::sync::watch;

/// Observable people counter, always >= 1
///
/// # Example
///
/// ```
/// use app_state::people::PeopleCounter;
///
/// let counter = PeopleCounter::new();
/// assert_eq!(counter.count(), 1);
/// assert_eq!(counter.add_person(), 2);
/// counter.reset();
/// assert_eq!(counter.count(), 1);
/// ```
pub struct PeopleCounter {
    tx: watch::Sender<u32>,
}

impl PeopleCounter {
    /// Create a counter at the initial count of 1
    pub fn new() -> Self {
        let (tx, _) = watch::channel(1);
        Self { tx }
    }

    /// Current count
    pub fn count(&self) -> u32 {
        *self.tx.borrow()
    }

    /// Add one person and return the new count
    pub fn add_person(&self) -> u32 {
        let mut new_count = 0;
        self.tx.send_modify(|count| {
            *count += 1;
            new_count = *count;
        });
        tracing::info!(people = new_count, "people count updated");
        new_count
    }

    /// Reset the count to 1
    ///
    /// Subscribers are only notified when the count actually changes.
    pub fn reset(&self) {
        let changed = self.tx.send_if_modified(|count| {
            if *count != 1 {
                *count = 1;
                true
            } else {
                false
            }
        });
        if changed {
            tracing::info!(people = 1, "people count reset");
        }
    }

    /// Subscribe to count changes
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.tx.subscribe()
    }
}

impl Default for PeopleCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_count_is_one() {
        let counter = PeopleCounter::new();
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_n_increments_yield_n_plus_one() {
        let counter = PeopleCounter::new();
        for _ in 0..5 {
            counter.add_person();
        }
        assert_eq!(counter.count(), 6);
    }

    #[test]
    fn test_add_person_returns_new_count() {
        let counter = PeopleCounter::new();
        assert_eq!(counter.add_person(), 2);
        assert_eq!(counter.add_person(), 3);
    }

    #[test]
    fn test_reset_returns_to_one() {
        let counter = PeopleCounter::new();
        counter.add_person();
        counter.add_person();
        counter.reset();
        assert_eq!(counter.count(), 1);
    }

    #[tokio::test]
    async fn test_subscriber_sees_increment() {
        let counter = PeopleCounter::new();
        let mut rx = counter.subscribe();
        assert_eq!(*rx.borrow(), 1);

        counter.add_person();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 2);
    }

    #[tokio::test]
    async fn test_reset_at_one_does_not_notify() {
        let counter = PeopleCounter::new();
        let mut rx = counter.subscribe();

        counter.reset();
        assert!(!rx.has_changed().unwrap());
    }
}
