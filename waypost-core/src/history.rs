//! History capability.
//!
//! The storage behind the address bar. The router writes through it on push
//! and replace; the host reports back/forward movement by calling the
//! controller's `on_location_change` with the new location.

use std::sync::Arc;

/// Reports and records browser locations.
pub trait History: Send + Sync + 'static {
    /// The current location, including the base path.
    fn location(&self) -> String;

    /// Record a new entry.
    fn push(&self, location: &str);

    /// Overwrite the current entry.
    fn replace(&self, location: &str);
}

impl<H: History + ?Sized> History for Arc<H> {
    fn location(&self) -> String {
        (**self).location()
    }

    fn push(&self, location: &str) {
        (**self).push(location)
    }

    fn replace(&self, location: &str) {
        (**self).replace(location)
    }
}
