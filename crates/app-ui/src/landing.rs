//! Landing screen timer
//!
//! The landing (splash) screen shows for a fixed time and then hands off to
//! the home screen. The timer is tied to the lifetime of its handle: drop
//! the handle before the deadline and the callback never runs.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// How long the landing screen stays up
pub const SPLASH_WAIT: Duration = Duration::from_secs(2);

/// Cancellable delayed callback backing the landing screen
///
/// # Example
///
/// ```no_run
/// use app_ui::landing::{LandingTimer, SPLASH_WAIT};
///
/// #[tokio::main]
/// async fn main() {
///     let (tx, rx) = tokio::sync::oneshot::channel();
///     let _timer = LandingTimer::start(SPLASH_WAIT, move || {
///         let _ = tx.send(());
///     });
///     rx.await.unwrap(); // home screen takes over here
/// }
/// ```
pub struct LandingTimer {
    stop_tx: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl LandingTimer {
    /// Start the timer; `on_timeout` runs once after `duration`
    pub fn start<F>(duration: Duration, on_timeout: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(duration) => on_timeout(),
                _ = &mut stop_rx => {}
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            _handle: handle,
        }
    }

    /// Cancel the timer before it fires
    pub fn cancel(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for LandingTimer {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}
