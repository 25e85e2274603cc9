//! # Navigation Hooks
//!
//! The before/after pair observed around every navigation attempt.
//!
//! - `before` runs synchronously, once per attempt, before any route
//!   matching. Returning [`HookResult::Next`] lets the attempt proceed.
//! - `after` runs exactly once per attempt, after it reaches a terminal
//!   [`NavigationOutcome`], whatever that outcome is.
//!
//! Hooks are fixed when a controller is built; they are not a user-facing
//! registration point.

use crate::navigation::{AttemptId, NavigationOutcome, NavigationRequest};

/// Result of a before-hook indicating whether the attempt continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookResult {
    /// Continue with the attempt.
    Next,
    /// Abort the attempt. Its after-hooks still run.
    Stop,
}

/// Observer of the navigation lifecycle.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `NavigationHook`",
    label = "missing `NavigationHook` implementation",
    note = "Implement `before` and/or `after` to observe navigation attempts."
)]
pub trait NavigationHook: Send + Sync + 'static {
    /// Called when an attempt is dispatched, before resolution.
    fn before(&self, id: AttemptId, request: &NavigationRequest) -> HookResult {
        let _ = (id, request);
        HookResult::Next
    }

    /// Called once the attempt has settled.
    fn after(&self, id: AttemptId, request: &NavigationRequest, outcome: &NavigationOutcome) {
        let _ = (id, request, outcome);
    }
}

impl<H: NavigationHook + ?Sized> NavigationHook for Box<H> {
    fn before(&self, id: AttemptId, request: &NavigationRequest) -> HookResult {
        (**self).before(id, request)
    }

    fn after(&self, id: AttemptId, request: &NavigationRequest, outcome: &NavigationOutcome) {
        (**self).after(id, request, outcome)
    }
}

impl<H: NavigationHook + ?Sized> NavigationHook for std::sync::Arc<H> {
    fn before(&self, id: AttemptId, request: &NavigationRequest) -> HookResult {
        (**self).before(id, request)
    }

    fn after(&self, id: AttemptId, request: &NavigationRequest, outcome: &NavigationOutcome) {
        (**self).after(id, request, outcome)
    }
}
