//! Standard navigation hooks.

pub mod chain;
pub mod logging;
pub mod progress;

pub use chain::HookChain;
pub use logging::LoggingHook;
pub use progress::ProgressHook;
