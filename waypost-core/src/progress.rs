//! Progress indicator sink.

use std::sync::Arc;

/// The external progress indicator driven by navigation.
///
/// `start` is called once when an attempt begins and `done` once when it
/// settles. Overlapping attempts produce overlapping calls, so
/// implementations must tolerate a `start` while already started and a `done`
/// while already done.
pub trait ProgressSink: Send + Sync + 'static {
    /// Show the indicator.
    fn start(&self);

    /// Complete and hide the indicator.
    fn done(&self);
}

/// A sink that ignores every signal.
impl ProgressSink for () {
    fn start(&self) {}
    fn done(&self) {}
}

impl<S: ProgressSink + ?Sized> ProgressSink for Arc<S> {
    fn start(&self) {
        (**self).start()
    }

    fn done(&self) {
        (**self).done()
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for Box<S> {
    fn start(&self) {
        (**self).start()
    }

    fn done(&self) {
        (**self).done()
    }
}
