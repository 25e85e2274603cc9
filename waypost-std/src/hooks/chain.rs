//! The ordered hook set owned by a controller.

use waypost_core::{AttemptId, HookResult, NavigationHook, NavigationOutcome, NavigationRequest};

/// An ordered, fixed set of navigation hooks.
///
/// Before-hooks run in registration order and after-hooks in reverse order,
/// so each hook's after side is nested inside the ones registered before it.
///
/// Every before-hook runs even when an earlier one returns
/// [`HookResult::Stop`], so that each hook sees a matching `after` call. The
/// chain reports `Stop` if any hook did.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn NavigationHook>>,
}

impl HookChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook.
    pub fn with<H: NavigationHook>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Number of hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl NavigationHook for HookChain {
    fn before(&self, id: AttemptId, request: &NavigationRequest) -> HookResult {
        let mut result = HookResult::Next;
        for hook in &self.hooks {
            if hook.before(id, request) == HookResult::Stop {
                result = HookResult::Stop;
            }
        }
        result
    }

    fn after(&self, id: AttemptId, request: &NavigationRequest, outcome: &NavigationOutcome) {
        for hook in self.hooks.iter().rev() {
            hook.after(id, request, outcome);
        }
    }
}
