//! Input debouncing
//!
//! Turns a rapidly changing value into committed values that are only
//! emitted after the input has been quiet for the configured interval.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Default quiet period before a raw query is committed
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// Emits a value once it has been stable for `interval`.
///
/// At most one delayed task is pending at any time: every new input aborts
/// the previous task before scheduling its own. Committed values are sent on
/// the channel given at construction; nothing else happens here.
pub struct Debouncer<T> {
    interval: Duration,
    pending: Option<JoinHandle<()>>,
    committed_tx: UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(interval: Duration, committed_tx: UnboundedSender<T>) -> Self {
        Self {
            interval,
            pending: None,
            committed_tx,
        }
    }

    /// Restart the quiet period with `value`.
    pub fn input(&mut self, value: T) {
        self.cancel();

        let tx = self.committed_tx.clone();
        // Deadline is fixed at the keystroke, not when the task first runs
        let deadline = tokio::time::Instant::now() + self.interval;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver is gone only during shutdown
            let _ = tx.send(value);
        }));
    }

    /// Commit `value` now, dropping whatever was pending.
    pub fn flush(&mut self, value: T) {
        self.cancel();
        let _ = self.committed_tx.send(value);
    }

    /// Drop the pending task without committing anything.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
