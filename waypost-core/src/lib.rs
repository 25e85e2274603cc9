//! # waypost-core
//!
//! Core traits for the Waypost client-side navigation router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! hosts and integrations (history backends, progress widgets, view loaders)
//! that don't need the full `waypost-std` implementation.
//!
//! # Building Blocks
//!
//! ## Routes ([`RouteDefinition`])
//!
//! A path pattern mapped to a [`RouteTarget`]: a lazily loaded view or a
//! redirect to another route by name.
//!
//! ## Loaders ([`Loader`])
//!
//! The deferred accessor behind a view route, and the single point at which a
//! navigation suspends.
//!
//! ## Hooks ([`NavigationHook`])
//!
//! The before/after pair observed around each navigation attempt.
//!
//! ## Collaborators ([`ProgressSink`], [`History`])
//!
//! The progress indicator and the location store, both external.
//!
//! # Error Types
//!
//! - [`ConfigError`] - Invalid route tables, rejected at construction
//! - [`NavigationError`] - Failures ending a navigation attempt

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod history;
mod hook;
mod loader;
mod navigation;
mod progress;
mod route;

// Re-exports
pub use error::{BoxError, ConfigError, ErrorKind, NavigationError};
pub use history::History;
pub use hook::{HookResult, NavigationHook};
pub use loader::{DynLoader, Loader, SharedLoader};
pub use navigation::{
    AttemptId, NavigationMode, NavigationOutcome, NavigationRequest, NavigationTarget,
};
pub use progress::ProgressSink;
pub use route::{RouteDefinition, RouteTarget};
