//! # waypost-std
//!
//! Standard implementations for the Waypost client-side navigation router.
//!
//! This crate provides:
//! - **Route resolution**: [`RouteTable`], [`BasePath`], [`RouteParams`]
//! - **Navigation lifecycle**: [`NavigationController`], [`NavigationAttempt`]
//! - **Standard hooks**: Logging, Progress, [`HookChain`]
//! - **Collaborators**: [`MemoryHistory`], [`RefCountedProgress`]
//! - **Configuration**: TOML route declarations (feature `config`)
//! - **Testing**: recording sinks/hooks and scripted loaders

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use waypost_core;

// Modules
#[cfg(feature = "config")]
pub mod config;
pub mod controller;
pub mod history;
pub mod hooks;
pub mod loaders;
pub mod progress;
pub mod routing;
pub mod testing;

pub use controller::{ActiveRoute, AttemptState, Navigation, NavigationAttempt, NavigationController};
pub use history::MemoryHistory;
pub use hooks::{HookChain, LoggingHook, ProgressHook};
pub use progress::RefCountedProgress;
pub use routing::{BasePath, Resolution, ResolvedRoute, RouteParams, RouteTable, RouteTableBuilder};
