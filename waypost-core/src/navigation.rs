//! Navigation requests and outcomes.

use crate::error::ErrorKind;
use std::fmt;

/// Identifies one navigation attempt. Ids increase in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

impl AttemptId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a navigation wants to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A browser location, including the base path.
    Location(String),
    /// A route, by logical name.
    Named(String),
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationTarget::Location(location) => f.write_str(location),
            NavigationTarget::Named(name) => write!(f, "{{{name}}}"),
        }
    }
}

/// How the history should record a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// Add a new history entry.
    #[default]
    Push,
    /// Overwrite the current history entry.
    Replace,
    /// The history already changed (back/forward); record nothing.
    Pop,
}

/// One request to navigate, built at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    target: NavigationTarget,
    mode: NavigationMode,
}

impl NavigationRequest {
    /// Create a request.
    pub fn new(target: NavigationTarget, mode: NavigationMode) -> Self {
        Self { target, mode }
    }

    /// Push a new location.
    pub fn push(location: impl Into<String>) -> Self {
        Self::new(NavigationTarget::Location(location.into()), NavigationMode::Push)
    }

    /// Replace the current location.
    pub fn replace(location: impl Into<String>) -> Self {
        Self::new(
            NavigationTarget::Location(location.into()),
            NavigationMode::Replace,
        )
    }

    /// React to a location the history has already moved to.
    pub fn pop(location: impl Into<String>) -> Self {
        Self::new(NavigationTarget::Location(location.into()), NavigationMode::Pop)
    }

    /// Push the route named `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(NavigationTarget::Named(name.into()), NavigationMode::Push)
    }

    /// Change the history mode.
    pub fn with_mode(mut self, mode: NavigationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The requested target.
    pub fn target(&self) -> &NavigationTarget {
        &self.target
    }

    /// The history mode.
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }
}

/// The terminal outcome of an attempt, as reported to after-hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The route's view was loaded.
    Activated {
        /// The activated route.
        route: String,
        /// The redirect route it was reached through, if any.
        redirected_from: Option<String>,
    },
    /// Resolution or loading failed.
    Failed(ErrorKind),
    /// A before-hook stopped the attempt.
    Aborted,
    /// The attempt was dropped before it settled.
    Cancelled,
}

impl NavigationOutcome {
    /// Whether the attempt ended with an activated view.
    pub fn is_activated(&self) -> bool {
        matches!(self, NavigationOutcome::Activated { .. })
    }
}

impl fmt::Display for NavigationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationOutcome::Activated { route, .. } => write!(f, "activated {route}"),
            NavigationOutcome::Failed(kind) => write!(f, "failed ({kind:?})"),
            NavigationOutcome::Aborted => f.write_str("aborted"),
            NavigationOutcome::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_constructors() {
        let push = NavigationRequest::push("/faber");
        assert_eq!(push.mode(), NavigationMode::Push);
        assert_eq!(
            push.target(),
            &NavigationTarget::Location("/faber".to_string())
        );

        assert_eq!(NavigationRequest::replace("/a").mode(), NavigationMode::Replace);
        assert_eq!(NavigationRequest::pop("/a").mode(), NavigationMode::Pop);

        let named = NavigationRequest::named("Home").with_mode(NavigationMode::Replace);
        assert_eq!(named.target(), &NavigationTarget::Named("Home".to_string()));
        assert_eq!(named.mode(), NavigationMode::Replace);
    }

    #[test]
    fn test_display() {
        assert_eq!(NavigationTarget::Named("Home".into()).to_string(), "{Home}");
        assert_eq!(NavigationTarget::Location("/home".into()).to_string(), "/home");
        assert_eq!(AttemptId::new(7).to_string(), "#7");
        assert_eq!(NavigationOutcome::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_attempt_ids_order() {
        assert!(AttemptId::new(1) < AttemptId::new(2));
        assert_eq!(AttemptId::new(3).get(), 3);
    }
}
