//! # waypost - Client-Side Navigation Router
//!
//! `waypost` maps URL paths to logical views inside a single long-lived page
//! session, follows static redirects, and drives a progress indicator around
//! every navigation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waypost::prelude::*;
//!
//! let table = RouteTable::new([
//!     RouteDefinition::view("Home", "/home", || async { Ok(View::Home) }),
//!     RouteDefinition::view("Faber", "/faber", || async { Ok(View::Faber) }),
//!     RouteDefinition::view("NotFound", "/404", || async { Ok(View::NotFound) }).as_fallback(),
//! ])?;
//!
//! let router = NavigationController::new(table, "/", MemoryHistory::default(), progress_bar);
//!
//! router.start().await?;            // `/` redirects to Home
//! router.push("/faber").await?;     // start() ... Faber loads ... done()
//! ```
//!
//! ## Resolution Rules
//!
//! - `/` is an alias for the route named `Home`.
//! - Routes are tested in declaration order; the first match wins.
//! - Anything unmatched lands on the single fallback route.
//! - Redirects are followed for exactly one hop.
//!
//! ## Features
//!
//! - `tracing` (default): structured logs for table construction and every
//!   navigation attempt.
//! - `timeout`: [`loaders::TimeoutLoader`].
//! - `config`: TOML route declarations via [`config::RouterConfig`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use waypost_core::{
    // Navigation
    AttemptId,
    // Error types
    BoxError,
    ConfigError,
    // Loader
    DynLoader,
    ErrorKind,
    // Collaborators
    History,
    // Hook
    HookResult,
    Loader,
    NavigationError,
    NavigationHook,
    NavigationMode,
    NavigationOutcome,
    NavigationRequest,
    NavigationTarget,
    ProgressSink,
    // Routes
    RouteDefinition,
    RouteTarget,
    SharedLoader,
};

pub use waypost_std::{
    // Controller
    ActiveRoute,
    AttemptState,
    // Routing
    BasePath,
    // Hooks
    HookChain,
    LoggingHook,
    // Collaborators
    MemoryHistory,
    Navigation,
    NavigationAttempt,
    NavigationController,
    ProgressHook,
    RefCountedProgress,
    Resolution,
    ResolvedRoute,
    RouteParams,
    RouteTable,
    RouteTableBuilder,
};

/// Standard hook implementations.
pub mod hooks {
    pub use waypost_std::hooks::{HookChain, LoggingHook, ProgressHook};
}

/// Loader wrappers.
pub mod loaders {
    #[cfg(feature = "timeout")]
    pub use waypost_std::loaders::{LoadTimeout, TimeoutLoader};
}

/// Declarative configuration.
#[cfg(feature = "config")]
pub mod config {
    pub use waypost_std::config::{LoaderSet, RouteConfig, RouterConfig};
}

/// Testing utilities.
pub mod testing {
    pub use waypost_std::testing::{
        FailingLoader, GatedLoader, HookEvent, LoaderGate, ProgressEvent, RecordingHook,
        RecordingSink, StaticLoader,
    };
}

/// Prelude module - common imports for Waypost.
///
/// # Usage
///
/// ```rust,ignore
/// use waypost::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BasePath, BoxError, ConfigError, History, Loader, MemoryHistory, Navigation,
        NavigationController, NavigationError, NavigationRequest, ProgressSink, Resolution,
        RouteDefinition, RouteTable,
    };
}
