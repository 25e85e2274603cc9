//! # Lazy View Loading (Loader)
//!
//! A loader is the deferred accessor behind a view route. It is invoked when a
//! navigation activates the route and yields the view unit, possibly after
//! suspending (fetching a code chunk, for example). This is the only point at
//! which a navigation attempt suspends.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Loader`] uses native `async fn` for static dispatch. Route tables store
//! heterogeneous loaders as [`DynLoader`] trait objects; every `Loader`
//! implements `DynLoader` automatically.

use crate::error::BoxError;
use std::{future::Future, pin::Pin, sync::Arc};

/// A deferred accessor yielding a view unit of type `V`.
///
/// Closures returning a future are loaders:
///
/// ```rust,ignore
/// let home = || async { Ok::<_, BoxError>(View::Home) };
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot load views of type `{V}`",
    label = "missing `Loader` implementation",
    note = "Loaders must implement `load`, or be a closure returning a future of `Result<{V}, BoxError>`."
)]
pub trait Loader<V>: Send + Sync + 'static {
    /// Produce the view unit.
    fn load(&self) -> impl Future<Output = Result<V, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Loader`].
pub trait DynLoader<V>: Send + Sync + 'static {
    /// Produce the view unit (dynamic dispatch version).
    fn load_dyn(&self) -> Pin<Box<dyn Future<Output = Result<V, BoxError>> + Send + '_>>;
}

// Blanket implementation: Any type implementing Loader implements DynLoader automatically.
impl<V: 'static, T: Loader<V>> DynLoader<V> for T {
    fn load_dyn(&self) -> Pin<Box<dyn Future<Output = Result<V, BoxError>> + Send + '_>> {
        Box::pin(self.load())
    }
}

impl<V, F, Fut> Loader<V> for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<V, BoxError>> + Send,
{
    fn load(&self) -> impl Future<Output = Result<V, BoxError>> + Send {
        self()
    }
}

/// A shared, type-erased loader as stored in a route definition.
pub type SharedLoader<V> = Arc<dyn DynLoader<V>>;
