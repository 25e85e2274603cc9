//! Logging Hook - Observability for navigation attempts.

use waypost_core::{AttemptId, HookResult, NavigationHook, NavigationOutcome, NavigationRequest};

/// A Hook that logs the start and end of every navigation attempt.
///
/// Uses the `tracing` crate when the `tracing` feature is enabled and does
/// nothing otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use waypost_std::hooks::{HookChain, LoggingHook};
///
/// let hooks = HookChain::new().with(LoggingHook::named("showcase"));
/// ```
pub struct LoggingHook {
    name: &'static str,
}

impl LoggingHook {
    /// Create a new `LoggingHook` with a default name.
    pub fn new() -> Self {
        Self { name: "router" }
    }

    /// Create a new `LoggingHook` with a custom name.
    ///
    /// The name is used in log records to identify the router.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log records.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationHook for LoggingHook {
    fn before(&self, id: AttemptId, request: &NavigationRequest) -> HookResult {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                router = %self.name,
                attempt = %id,
                target = %request.target(),
                mode = ?request.mode(),
                "navigation started"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, id, request);
        }

        HookResult::Next
    }

    fn after(&self, id: AttemptId, request: &NavigationRequest, outcome: &NavigationOutcome) {
        #[cfg(feature = "tracing")]
        {
            match outcome {
                NavigationOutcome::Activated { .. } => tracing::info!(
                    router = %self.name,
                    attempt = %id,
                    target = %request.target(),
                    outcome = %outcome,
                    "navigation settled"
                ),
                NavigationOutcome::Failed(_) => tracing::warn!(
                    router = %self.name,
                    attempt = %id,
                    target = %request.target(),
                    outcome = %outcome,
                    "navigation failed"
                ),
                NavigationOutcome::Aborted | NavigationOutcome::Cancelled => tracing::debug!(
                    router = %self.name,
                    attempt = %id,
                    target = %request.target(),
                    outcome = %outcome,
                    "navigation did not complete"
                ),
            }
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, id, request, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_hook_continues() {
        let hook = LoggingHook::new();
        let request = NavigationRequest::push("/home");
        assert_eq!(hook.before(AttemptId::new(1), &request), HookResult::Next);
        hook.after(AttemptId::new(1), &request, &NavigationOutcome::Cancelled);
    }

    #[test]
    fn test_logging_hook_named() {
        let hook = LoggingHook::named("showcase");
        assert_eq!(hook.name(), "showcase");
        assert_eq!(LoggingHook::default().name(), "router");
    }
}
