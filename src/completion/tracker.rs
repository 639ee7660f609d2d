use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

type Callback = Box<dyn FnOnce() + Send>;

/// Folds `total` independent "finished" signals into one "all finished" callback.
///
/// Arrival order is irrelevant. The callback runs exactly once: immediately on
/// construction when `total == 0`, otherwise on the `total`-th signal. Signals
/// after that are no-ops.
pub struct CompletionTracker {
    total: usize,
    finished: AtomicUsize,
    fired: AtomicBool,
    on_all_finished: Mutex<Option<Callback>>,
}

impl CompletionTracker {
    pub fn new(total: usize, on_all_finished: impl FnOnce() + Send + 'static) -> Self {
        let tracker = Self {
            total,
            finished: AtomicUsize::new(0),
            fired: AtomicBool::new(false),
            on_all_finished: Mutex::new(Some(Box::new(on_all_finished))),
        };
        if total == 0 {
            tracker.fire();
        }
        tracker
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::Acquire)
    }

    pub fn is_complete(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Record one finished item. Returns `true` when this call fired the callback.
    pub fn on_item_finished(&self) -> bool {
        if self.is_complete() {
            tracing::debug!(total = self.total, "finish signal after completion ignored");
            return false;
        }
        let prev = self
            .finished
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.total).then_some(n + 1)
            });
        match prev {
            Ok(n) if n + 1 == self.total => self.fire(),
            Ok(_) => false,
            Err(_) => false,
        }
    }

    fn fire(&self) -> bool {
        if self
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        let cb = match self.on_all_finished.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(cb) = cb {
            tracing::debug!(total = self.total, "all items finished");
            cb();
        }
        true
    }
}

impl std::fmt::Debug for CompletionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionTracker")
            .field("total", &self.total)
            .field("finished", &self.finished())
            .field("fired", &self.is_complete())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/completion/tracker.rs"]
mod tests;
