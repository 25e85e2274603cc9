//! Progress sink adapters.

use std::sync::atomic::{AtomicUsize, Ordering};
use waypost_core::ProgressSink;

/// Makes any sink safe under overlapping navigations.
///
/// Counts in-flight attempts: the inner sink is started when the count goes
/// from zero to one and completed when it drops back to zero. A `done` with
/// nothing in flight is ignored.
pub struct RefCountedProgress<S> {
    inner: S,
    active: AtomicUsize,
}

impl<S> RefCountedProgress<S> {
    /// Wrap `inner`.
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            active: AtomicUsize::new(0),
        }
    }

    /// Number of attempts currently holding the indicator.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// The wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ProgressSink> ProgressSink for RefCountedProgress<S> {
    fn start(&self) {
        if self.active.fetch_add(1, Ordering::SeqCst) == 0 {
            self.inner.start();
        }
    }

    fn done(&self) {
        let previous = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if previous == Ok(1) {
            self.inner.done();
        }
    }
}
