//! Progress Hook - drives the progress indicator from the navigation lifecycle.

use waypost_core::{
    AttemptId, HookResult, NavigationHook, NavigationOutcome, NavigationRequest, ProgressSink,
};

/// A hook that starts the progress indicator before every attempt and
/// completes it after every attempt.
///
/// The before side never blocks navigation: it always returns
/// [`HookResult::Next`].
pub struct ProgressHook<S> {
    sink: S,
}

impl<S> ProgressHook<S> {
    /// Create a progress hook driving `sink`.
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The driven sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: ProgressSink> NavigationHook for ProgressHook<S> {
    fn before(&self, _id: AttemptId, _request: &NavigationRequest) -> HookResult {
        self.sink.start();
        HookResult::Next
    }

    fn after(&self, _id: AttemptId, _request: &NavigationRequest, _outcome: &NavigationOutcome) {
        self.sink.done();
    }
}
