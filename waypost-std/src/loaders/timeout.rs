//! Timeout wrapper for time-limited view loading.

use std::time::Duration;
use tokio::time::timeout;
use waypost_core::{BoxError, Loader};

/// Error returned when a view takes too long to load.
#[derive(Debug, Clone, thiserror::Error)]
#[error("view load timed out after {0:?}")]
pub struct LoadTimeout(pub Duration);

/// A loader that wraps another loader with a timeout.
pub struct TimeoutLoader<L> {
    inner: L,
    duration: Duration,
}

impl<L> TimeoutLoader<L> {
    /// Create a new timeout loader.
    pub fn new(inner: L, duration: Duration) -> Self {
        Self { inner, duration }
    }
}

impl<V: Send + 'static, L: Loader<V>> Loader<V> for TimeoutLoader<L> {
    async fn load(&self) -> Result<V, BoxError> {
        match timeout(self.duration, self.inner.load()).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(LoadTimeout(self.duration))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{GatedLoader, StaticLoader};

    #[tokio::test]
    async fn test_fast_load_passes_through() {
        let loader = TimeoutLoader::new(StaticLoader::new(1u8), Duration::from_millis(50));
        assert_eq!(loader.load().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_slow_load_times_out() {
        let (gated, _gate) = GatedLoader::new(1u8);
        let loader = TimeoutLoader::new(gated, Duration::from_millis(10));

        let err = loader.load().await.unwrap_err();
        assert!(err.downcast_ref::<LoadTimeout>().is_some());
    }
}
