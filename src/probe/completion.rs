//! Counting join for the probe workers of one cycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

/// Becomes satisfied once every registered worker has dropped its guard.
#[derive(Debug, Default)]
pub struct CompletionSignal {
    pending: AtomicUsize,
    drained: Notify,
}

impl CompletionSignal {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers one worker. The count drops back when the guard is dropped,
    /// so success, failure, and panics all decrement exactly once.
    #[must_use]
    pub fn enter(self: &Arc<Self>) -> CompletionGuard {
        self.pending.fetch_add(1, Ordering::AcqRel);
        CompletionGuard {
            signal: Arc::clone(self),
        }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.pending() == 0
    }

    /// Waits until the pending count reaches zero.
    pub async fn wait(&self) {
        loop {
            let notified = self.drained.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.is_drained() {
                return;
            }
            notified.await;
        }
    }

    fn leave(&self) {
        let previous = self.pending.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            self.drained.notify_waiters();
        }
    }
}

/// Held by a worker for its whole lifetime.
#[derive(Debug)]
pub struct CompletionGuard {
    signal: Arc<CompletionSignal>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.signal.leave();
    }
}
