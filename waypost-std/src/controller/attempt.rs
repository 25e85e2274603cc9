//! The lifecycle object of one navigation attempt.

use crate::hooks::HookChain;
use std::sync::atomic::{AtomicUsize, Ordering};
use waypost_core::{AttemptId, HookResult, NavigationHook, NavigationOutcome, NavigationRequest};

/// Where an attempt is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Before-hooks have run; the progress indicator has started.
    Pending,
    /// The route table produced a route; its view is loading.
    Resolved,
    /// After-hooks have run.
    Settled,
}

/// One navigation attempt, from its before-hooks to its after-hooks.
///
/// Created by `NavigationController::begin`, which runs the before-hooks.
/// The after-hooks run exactly once: when the controller completes the
/// attempt, when [`abort`](Self::abort) is called, or, failing both, when the
/// attempt is dropped (reported as [`NavigationOutcome::Cancelled`]).
pub struct NavigationAttempt<'c> {
    id: AttemptId,
    request: NavigationRequest,
    state: AttemptState,
    stopped: bool,
    hooks: &'c HookChain,
    in_flight: &'c AtomicUsize,
}

impl<'c> NavigationAttempt<'c> {
    pub(crate) fn begin(
        id: AttemptId,
        request: NavigationRequest,
        hooks: &'c HookChain,
        in_flight: &'c AtomicUsize,
    ) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        let stopped = hooks.before(id, &request) == HookResult::Stop;
        Self {
            id,
            request,
            state: AttemptState::Pending,
            stopped,
            hooks,
            in_flight,
        }
    }

    /// The attempt's id.
    pub fn id(&self) -> AttemptId {
        self.id
    }

    /// The request being served.
    pub fn request(&self) -> &NavigationRequest {
        &self.request
    }

    /// The current lifecycle state.
    pub fn state(&self) -> AttemptState {
        self.state
    }

    /// Whether a before-hook asked to stop this attempt.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Settle the attempt as aborted without resolving it.
    pub fn abort(mut self) {
        self.finish(NavigationOutcome::Aborted);
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.state = AttemptState::Resolved;
    }

    pub(crate) fn settle(mut self, outcome: NavigationOutcome) {
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: NavigationOutcome) {
        if self.state == AttemptState::Settled {
            return;
        }
        self.state = AttemptState::Settled;
        self.hooks.after(self.id, &self.request, &outcome);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Drop for NavigationAttempt<'_> {
    fn drop(&mut self) {
        self.finish(NavigationOutcome::Cancelled);
    }
}

impl std::fmt::Debug for NavigationAttempt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationAttempt")
            .field("id", &self.id)
            .field("request", &self.request)
            .field("state", &self.state)
            .field("stopped", &self.stopped)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{HookEvent, RecordingHook};

    fn fixture() -> (HookChain, RecordingHook, AtomicUsize) {
        let recorder = RecordingHook::new();
        (
            HookChain::new().with(recorder.clone()),
            recorder,
            AtomicUsize::new(0),
        )
    }

    #[test]
    fn test_begin_runs_before_hooks() {
        let (hooks, recorder, in_flight) = fixture();
        let attempt = NavigationAttempt::begin(
            AttemptId::new(1),
            NavigationRequest::push("/home"),
            &hooks,
            &in_flight,
        );

        assert_eq!(attempt.state(), AttemptState::Pending);
        assert!(!attempt.is_stopped());
        assert_eq!(recorder.events(), [HookEvent::Before(AttemptId::new(1))]);
        assert_eq!(in_flight.load(Ordering::SeqCst), 1);

        attempt.abort();
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_settle_runs_after_hooks_once() {
        let (hooks, recorder, in_flight) = fixture();
        let mut attempt = NavigationAttempt::begin(
            AttemptId::new(2),
            NavigationRequest::push("/faber"),
            &hooks,
            &in_flight,
        );
        attempt.mark_resolved();
        assert_eq!(attempt.state(), AttemptState::Resolved);

        let outcome = NavigationOutcome::Activated {
            route: "Faber".into(),
            redirected_from: None,
        };
        attempt.settle(outcome.clone());

        assert_eq!(
            recorder.events(),
            [
                HookEvent::Before(AttemptId::new(2)),
                HookEvent::After(AttemptId::new(2), outcome),
            ]
        );
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_reports_cancelled() {
        let (hooks, recorder, in_flight) = fixture();
        {
            let _attempt = NavigationAttempt::begin(
                AttemptId::new(3),
                NavigationRequest::push("/innkeeper"),
                &hooks,
                &in_flight,
            );
        }

        assert_eq!(recorder.outcomes(), [NavigationOutcome::Cancelled]);
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stop_is_recorded() {
        let hooks = HookChain::new().with(RecordingHook::with_result(HookResult::Stop));
        let in_flight = AtomicUsize::new(0);
        let attempt = NavigationAttempt::begin(
            AttemptId::new(4),
            NavigationRequest::push("/home"),
            &hooks,
            &in_flight,
        );
        assert!(attempt.is_stopped());
    }
}
