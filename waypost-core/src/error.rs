//! Error types for Waypost.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ConfigError`] - Fatal errors detected while building a route table
//! - [`NavigationError`] - Errors ending a single navigation attempt
//! - [`ErrorKind`] - A copyable discriminant of [`NavigationError`], handed to hooks

use thiserror::Error;

/// A boxed error type for opaque collaborator errors (loaders, parsers).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while constructing a route table.
///
/// A table is never usable in an invalid state: every violation is reported
/// here, before the first resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Two routes share the same logical name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    /// No route is marked as the fallback.
    #[error("no fallback route declared")]
    MissingFallback,

    /// More than one route is marked as the fallback.
    #[error("more than one fallback route declared: {first} and {second}")]
    DuplicateFallback {
        /// The first fallback in table order.
        first: String,
        /// The offending second fallback.
        second: String,
    },

    /// A redirect names a route that does not exist.
    #[error("route {route} redirects to unknown route {target}")]
    UnknownRedirectTarget {
        /// The redirecting route.
        route: String,
        /// The missing target name.
        target: String,
    },

    /// A redirect names another redirect.
    #[error("route {route} redirects to {target}, which is itself a redirect")]
    RedirectChain {
        /// The redirecting route.
        route: String,
        /// The target, which also redirects.
        target: String,
    },

    /// A redirect or the root alias targets a route whose path has parameters.
    #[error("{from} targets route {target}, whose path has parameters")]
    ParameterizedTarget {
        /// The redirecting route, or `/` for the root alias.
        from: String,
        /// The parameterized target.
        target: String,
    },

    /// The root alias names a route that does not exist.
    #[error("root alias target {0} is not declared")]
    UnknownRootTarget(String),

    /// The root alias names a redirect.
    #[error("root alias target {0} is a redirect")]
    RootTargetIsRedirect(String),

    /// A path pattern could not be compiled.
    #[error("invalid path pattern {pattern} on route {route}: {reason}")]
    InvalidPattern {
        /// The route declaring the pattern.
        route: String,
        /// The pattern as written.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// The same pattern is declared on two routes.
    #[error("path pattern {pattern} is declared by both {first} and {second}")]
    DuplicatePattern {
        /// The duplicated pattern.
        pattern: String,
        /// The route declaring it first.
        first: String,
        /// The route declaring it again.
        second: String,
    },

    /// A route declares `/` while `/` is reserved for the root alias.
    #[error("route {0} declares the root path, which is reserved for the root alias")]
    ShadowedRoot(String),

    /// The configuration source could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration source could not be parsed.
    #[error("failed to parse configuration")]
    Parse(#[source] BoxError),

    /// A configured route names a view key with no loader bound to it.
    #[error("route {route} references unknown view {view}")]
    UnknownView {
        /// The configured route.
        route: String,
        /// The unbound view key.
        view: String,
    },

    /// A configured route has neither a view nor a redirect.
    #[error("route {0} declares neither a view nor a redirect")]
    MissingTarget(String),

    /// A configured route has both a view and a redirect.
    #[error("route {0} declares both a view and a redirect")]
    AmbiguousTarget(String),
}

/// Errors that end a navigation attempt.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// No route matched and the table has no fallback.
    #[error("no route matches {0}")]
    NotFound(String),

    /// A redirect would have to be followed more than one hop.
    #[error("redirect from {from} to {to} would chain past a single hop")]
    RedirectChain {
        /// The redirect that was followed.
        from: String,
        /// The target, which redirects again.
        to: String,
    },

    /// Navigation by name referenced an undeclared route.
    #[error("no route named {0}")]
    UnknownRoute(String),

    /// Navigation by name referenced a route whose path has parameters.
    #[error("route {0} has path parameters and cannot be reached by name")]
    ParameterizedRoute(String),

    /// The requested location does not live under the base path.
    #[error("location {location} is outside the base path {base}")]
    OutsideBase {
        /// The requested location.
        location: String,
        /// The router's base path.
        base: String,
    },

    /// A before-hook stopped the attempt.
    #[error("navigation was aborted by a before-hook")]
    Aborted,

    /// The route's loader failed.
    #[error("failed to load view for route {route}")]
    Load {
        /// The route whose view failed to load.
        route: String,
        /// The loader's error.
        #[source]
        source: BoxError,
    },
}

impl NavigationError {
    /// The copyable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NavigationError::NotFound(_) => ErrorKind::NotFound,
            NavigationError::RedirectChain { .. } => ErrorKind::RedirectChain,
            NavigationError::UnknownRoute(_) => ErrorKind::UnknownRoute,
            NavigationError::ParameterizedRoute(_) => ErrorKind::ParameterizedRoute,
            NavigationError::OutsideBase { .. } => ErrorKind::OutsideBase,
            NavigationError::Aborted => ErrorKind::Aborted,
            NavigationError::Load { .. } => ErrorKind::Load,
        }
    }
}

/// Discriminant of [`NavigationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`NavigationError::NotFound`].
    NotFound,
    /// See [`NavigationError::RedirectChain`].
    RedirectChain,
    /// See [`NavigationError::UnknownRoute`].
    UnknownRoute,
    /// See [`NavigationError::ParameterizedRoute`].
    ParameterizedRoute,
    /// See [`NavigationError::OutsideBase`].
    OutsideBase,
    /// See [`NavigationError::Aborted`].
    Aborted,
    /// See [`NavigationError::Load`].
    Load,
}
