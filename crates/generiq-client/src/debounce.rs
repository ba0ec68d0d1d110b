//! Debounced task scheduling.
//!
//! Search-as-you-type should not fire a lookup per keystroke. The
//! contract is a timer-based deferral: a scheduled task runs only after
//! the input has been quiescent for the full delay, and scheduling again
//! cancels any task that has not fired yet. One pending task at a time.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Quiescence interval tuned against the upstream rate limits.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);

/// Defers a task until input has settled.
///
/// Must be used from within a tokio runtime. Dropping the debouncer
/// aborts whatever is still pending.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    /// Debouncer with the given quiescence delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `task` to run after the delay, replacing (and canceling)
    /// any previously scheduled task that has not fired yet. A task that
    /// already started is not interrupted.
    pub fn call<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            task.await;
        });

        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.replace(handle) {
                previous.abort();
            }
        }
    }

    /// Cancel the pending task, if any, without scheduling a new one.
    pub fn cancel(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.take() {
                previous.abort();
            }
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
