//! Loader wrappers.

#[cfg(feature = "timeout")]
pub mod timeout;

#[cfg(feature = "timeout")]
pub use timeout::{LoadTimeout, TimeoutLoader};
