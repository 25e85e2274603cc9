//! Testing utilities for Waypost.
//!
//! This module provides collaborators that make testing route tables and
//! navigation controllers easier.
//!
//! # Features
//!
//! - [`RecordingSink`]: A progress sink that records every signal
//! - [`RecordingHook`]: A hook that records every lifecycle call
//! - [`StaticLoader`]: A loader that resolves immediately and counts calls
//! - [`FailingLoader`]: A loader that always fails
//! - [`GatedLoader`]: A loader that suspends until its [`LoaderGate`] opens

use futures::{
    channel::oneshot,
    future::{FutureExt, Shared},
};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};
use waypost_core::{
    AttemptId, BoxError, HookResult, Loader, NavigationHook, NavigationOutcome, NavigationRequest,
    ProgressSink,
};

// ============================================================================
// Recording Sink
// ============================================================================

/// A signal received by a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// `start()` was called.
    Start,
    /// `done()` was called.
    Done,
}

/// A progress sink that records every signal it receives.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// let controller = NavigationController::new(table, base, history, sink.clone());
///
/// controller.push("/faber").await?;
/// assert_eq!(sink.events(), [ProgressEvent::Start, ProgressEvent::Done]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded signals.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of `start()` calls.
    pub fn starts(&self) -> usize {
        self.count(ProgressEvent::Start)
    }

    /// Number of `done()` calls.
    pub fn dones(&self) -> usize {
        self.count(ProgressEvent::Done)
    }

    /// Clear all recorded signals.
    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn count(&self, kind: ProgressEvent) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|&&event| event == kind)
            .count()
    }
}

impl ProgressSink for RecordingSink {
    fn start(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(ProgressEvent::Start);
    }

    fn done(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(ProgressEvent::Done);
    }
}

// ============================================================================
// Recording Hook
// ============================================================================

/// A lifecycle call received by a [`RecordingHook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    /// `before` ran for this attempt.
    Before(AttemptId),
    /// `after` ran for this attempt with this outcome.
    After(AttemptId, NavigationOutcome),
}

/// A hook that records all lifecycle calls it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHook::new();
/// let hooks = HookChain::new().with(recorder.clone());
///
/// // Navigate...
///
/// assert_eq!(recorder.events()[0], HookEvent::Before(AttemptId::new(1)));
/// ```
pub struct RecordingHook {
    events: Arc<Mutex<Vec<HookEvent>>>,
    result: HookResult,
}

impl RecordingHook {
    /// Create a new recording hook whose before side returns `Next`.
    pub fn new() -> Self {
        Self::with_result(HookResult::Next)
    }

    /// Create a recording hook whose before side returns `result`.
    pub fn with_result(result: HookResult) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a clone of the recorded calls.
    pub fn events(&self) -> Vec<HookEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// The outcomes passed to `after`, in call order.
    pub fn outcomes(&self) -> Vec<NavigationOutcome> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter_map(|event| match event {
                HookEvent::After(_, outcome) => Some(outcome.clone()),
                HookEvent::Before(_) => None,
            })
            .collect()
    }
}

impl Default for RecordingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingHook {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            result: self.result,
        }
    }
}

impl NavigationHook for RecordingHook {
    fn before(&self, id: AttemptId, _request: &NavigationRequest) -> HookResult {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(HookEvent::Before(id));
        self.result
    }

    fn after(&self, id: AttemptId, _request: &NavigationRequest, outcome: &NavigationOutcome) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(HookEvent::After(id, outcome.clone()));
    }
}

// ============================================================================
// Loaders
// ============================================================================

/// A loader that yields a clone of a fixed view and counts its invocations.
pub struct StaticLoader<V> {
    view: V,
    calls: Arc<AtomicUsize>,
}

impl<V: Clone> StaticLoader<V> {
    /// Create a loader yielding `view`.
    pub fn new(view: V) -> Self {
        Self {
            view,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A shared counter of `load` calls, readable after the loader moved into
    /// a route table.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    /// Number of `load` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<V: Clone + Send + Sync + 'static> Loader<V> for StaticLoader<V> {
    async fn load(&self) -> Result<V, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.view.clone())
    }
}

/// A loader that always fails with the given message.
pub struct FailingLoader {
    message: String,
}

impl FailingLoader {
    /// Create a loader failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<V: Send + 'static> Loader<V> for FailingLoader {
    async fn load(&self) -> Result<V, BoxError> {
        Err(self.message.clone().into())
    }
}

/// Opens a [`GatedLoader`].
pub struct LoaderGate {
    tx: oneshot::Sender<()>,
}

impl LoaderGate {
    /// Let every pending and future load of the paired loader complete.
    pub fn open(self) {
        let _ = self.tx.send(());
    }
}

/// A loader that suspends until its [`LoaderGate`] is opened.
///
/// Dropping the gate without opening it makes pending loads fail.
pub struct GatedLoader<V> {
    view: V,
    gate: Shared<oneshot::Receiver<()>>,
}

impl<V: Clone> GatedLoader<V> {
    /// Create a gated loader yielding `view`, and its gate.
    pub fn new(view: V) -> (Self, LoaderGate) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                view,
                gate: rx.shared(),
            },
            LoaderGate { tx },
        )
    }
}

impl<V: Clone + Send + Sync + 'static> Loader<V> for GatedLoader<V> {
    async fn load(&self) -> Result<V, BoxError> {
        self.gate
            .clone()
            .await
            .map_err(|_| BoxError::from("loader gate dropped"))?;
        Ok(self.view.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_loader_counts_calls() {
        let loader = StaticLoader::new("home");
        assert_eq!(loader.load().await.unwrap(), "home");
        assert_eq!(loader.load().await.unwrap(), "home");
        assert_eq!(loader.calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_loader() {
        let loader = FailingLoader::new("chunk missing");
        let err = Loader::<u8>::load(&loader).await.unwrap_err();
        assert_eq!(err.to_string(), "chunk missing");
    }

    #[tokio::test]
    async fn test_gated_loader_waits_for_gate() {
        let (loader, gate) = GatedLoader::new(7u8);
        let pending = loader.load();
        futures::pin_mut!(pending);
        assert!(futures::poll!(pending.as_mut()).is_pending());

        gate.open();
        assert_eq!(pending.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_gated_loader_fails_when_gate_dropped() {
        let (loader, gate) = GatedLoader::new(7u8);
        drop(gate);
        assert!(loader.load().await.is_err());
    }

    #[test]
    fn test_recording_sink_counts() {
        let sink = RecordingSink::new();
        sink.start();
        sink.done();
        sink.start();
        assert_eq!(sink.starts(), 2);
        assert_eq!(sink.dones(), 1);
        sink.clear();
        assert!(sink.events().is_empty());
    }
}
