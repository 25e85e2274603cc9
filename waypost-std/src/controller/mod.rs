//! # Navigation Controller
//!
//! Wraps a [`RouteTable`] with a base path and runs every navigation through
//! one lifecycle:
//!
//! ```text
//! Idle ──begin──▶ Pending ──resolve──▶ Resolved ──load──▶ Settled ──▶ Idle
//!                    │                     │                 ▲
//!                    └──── stop / error ───┴─────────────────┘
//! ```
//!
//! Before-hooks run on `begin`, before any matching. After-hooks run exactly
//! once per attempt, whatever the outcome. The standard hook chain starts the
//! progress indicator on the way in and completes it on the way out.
//!
//! Attempts may overlap. Each keeps its own before/after pairing; the history
//! and [`current`](NavigationController::current) route only move forward,
//! so a slow attempt settling after a newer one does not overwrite it.

mod attempt;

pub use attempt::{AttemptState, NavigationAttempt};

use crate::{
    history::MemoryHistory,
    hooks::{HookChain, LoggingHook, ProgressHook},
    routing::{BasePath, Resolution, ResolvedRoute, RouteParams, RouteTable, normalize},
};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};
use waypost_core::{
    AttemptId, History, NavigationError, NavigationMode, NavigationOutcome, NavigationRequest,
    NavigationTarget, ProgressSink,
};

/// An owned snapshot of an activated route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRoute {
    name: String,
    path: String,
    params: RouteParams,
    fallback: bool,
    redirected_from: Option<String>,
}

impl ActiveRoute {
    fn new<V>(route: &ResolvedRoute<'_, V>) -> Self {
        Self {
            name: route.name().to_string(),
            path: route.path().to_string(),
            params: route.params().clone(),
            fallback: route.is_fallback(),
            redirected_from: route.redirected_from().map(str::to_string),
        }
    }

    /// The route's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path relative to the base path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters captured from the path.
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Whether the route was reached as the catch-all fallback.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// The redirect route this was reached through, if any.
    pub fn redirected_from(&self) -> Option<&str> {
        self.redirected_from.as_deref()
    }
}

/// A completed navigation.
#[derive(Debug)]
pub struct Navigation<V> {
    id: AttemptId,
    route: ActiveRoute,
    view: V,
}

impl<V> Navigation<V> {
    /// The attempt that produced this navigation.
    pub fn id(&self) -> AttemptId {
        self.id
    }

    /// The activated route.
    pub fn route(&self) -> &ActiveRoute {
        &self.route
    }

    /// The loaded view unit.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Take the loaded view unit.
    pub fn into_view(self) -> V {
        self.view
    }
}

struct Committed {
    id: AttemptId,
    route: ActiveRoute,
}

/// Routes navigation requests through a [`RouteTable`] for the lifetime of a
/// page session.
pub struct NavigationController<V, H = MemoryHistory> {
    table: Arc<RouteTable<V>>,
    base: BasePath,
    history: H,
    hooks: HookChain,
    next_id: AtomicU64,
    in_flight: AtomicUsize,
    committed: Mutex<Option<Committed>>,
}

impl<V: 'static, H: History> NavigationController<V, H> {
    /// Create a controller with the standard hooks: logging, then progress
    /// signalling to `progress`.
    pub fn new(
        table: impl Into<Arc<RouteTable<V>>>,
        base: impl Into<BasePath>,
        history: H,
        progress: impl ProgressSink,
    ) -> Self {
        let hooks = HookChain::new()
            .with(LoggingHook::new())
            .with(ProgressHook::new(progress));
        Self::with_hooks(table, base, history, hooks)
    }

    /// Create a controller with an explicit hook chain.
    pub fn with_hooks(
        table: impl Into<Arc<RouteTable<V>>>,
        base: impl Into<BasePath>,
        history: H,
        hooks: HookChain,
    ) -> Self {
        Self {
            table: table.into(),
            base: base.into(),
            history,
            hooks,
            next_id: AtomicU64::new(1),
            in_flight: AtomicUsize::new(0),
            committed: Mutex::new(None),
        }
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// The base path.
    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// The history backend.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// The hook chain, fixed at construction.
    pub fn hooks(&self) -> &HookChain {
        &self.hooks
    }

    /// Number of attempts that have begun but not settled.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Whether no attempt is in flight.
    pub fn is_idle(&self) -> bool {
        self.in_flight() == 0
    }

    /// The most recently activated route.
    pub fn current(&self) -> Option<ActiveRoute> {
        self.committed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|committed| committed.route.clone())
    }

    /// Resolve a browser location without navigating.
    pub fn resolve(&self, location: &str) -> Result<Resolution<'_, V>, NavigationError> {
        Ok(self.table.resolve(self.strip(location)?))
    }

    /// The browser location of the named route, for links.
    ///
    /// `None` for unknown routes and for routes whose path has parameters.
    pub fn href(&self, name: &str) -> Option<String> {
        self.table.path_for(name).map(|path| self.base.join(path))
    }

    /// Begin an attempt: allocate its id and run the before-hooks.
    pub fn begin(&self, request: NavigationRequest) -> NavigationAttempt<'_> {
        let id = AttemptId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        NavigationAttempt::begin(id, request, &self.hooks, &self.in_flight)
    }

    /// Resolve and activate a begun attempt, then settle it.
    pub async fn complete(
        &self,
        mut attempt: NavigationAttempt<'_>,
    ) -> Result<Navigation<V>, NavigationError> {
        let result = self.run(&mut attempt).await;
        let outcome = match &result {
            Ok(navigation) => NavigationOutcome::Activated {
                route: navigation.route.name.clone(),
                redirected_from: navigation.route.redirected_from.clone(),
            },
            Err(NavigationError::Aborted) => NavigationOutcome::Aborted,
            Err(err) => NavigationOutcome::Failed(err.kind()),
        };
        attempt.settle(outcome);
        result
    }

    /// Run one attempt for `request`.
    pub async fn dispatch(&self, request: NavigationRequest) -> Result<Navigation<V>, NavigationError> {
        self.complete(self.begin(request)).await
    }

    /// Navigate to `location`, adding a history entry.
    pub async fn push(&self, location: &str) -> Result<Navigation<V>, NavigationError> {
        self.dispatch(NavigationRequest::push(location)).await
    }

    /// Navigate to `location`, replacing the current history entry.
    pub async fn replace(&self, location: &str) -> Result<Navigation<V>, NavigationError> {
        self.dispatch(NavigationRequest::replace(location)).await
    }

    /// Navigate to the route named `name`.
    pub async fn push_named(&self, name: &str) -> Result<Navigation<V>, NavigationError> {
        self.dispatch(NavigationRequest::named(name)).await
    }

    /// React to the history moving to `location` on its own (back/forward).
    pub async fn on_location_change(&self, location: &str) -> Result<Navigation<V>, NavigationError> {
        self.dispatch(NavigationRequest::pop(location)).await
    }

    /// Initial navigation to the history's current location.
    pub async fn start(&self) -> Result<Navigation<V>, NavigationError> {
        let location = self.history.location();
        self.on_location_change(&location).await
    }

    async fn run(&self, attempt: &mut NavigationAttempt<'_>) -> Result<Navigation<V>, NavigationError> {
        if attempt.is_stopped() {
            return Err(NavigationError::Aborted);
        }

        let route = self.resolve_target(attempt.request().target())?;
        attempt.mark_resolved();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            attempt = %attempt.id(),
            route = %route.name(),
            path = %route.path(),
            fallback = route.is_fallback(),
            "route resolved"
        );

        let view = route
            .loader()
            .load_dyn()
            .await
            .map_err(|source| NavigationError::Load {
                route: route.name().to_string(),
                source,
            })?;

        let active = ActiveRoute::new(&route);
        self.commit(attempt.id(), attempt.request(), &active);

        Ok(Navigation {
            id: attempt.id(),
            route: active,
            view,
        })
    }

    fn resolve_target(&self, target: &NavigationTarget) -> Result<ResolvedRoute<'_, V>, NavigationError> {
        match target {
            NavigationTarget::Location(location) => self.table.follow(self.strip(location)?),
            NavigationTarget::Named(name) => self.table.resolve_name(name),
        }
    }

    fn strip<'a>(&self, location: &'a str) -> Result<&'a str, NavigationError> {
        self.base
            .strip(location)
            .ok_or_else(|| NavigationError::OutsideBase {
                location: location.to_string(),
                base: self.base.to_string(),
            })
    }

    /// Record an activation in the history and as the current route, unless
    /// a newer attempt already did.
    fn commit(&self, id: AttemptId, request: &NavigationRequest, route: &ActiveRoute) {
        let mut committed = self
            .committed
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if committed.as_ref().is_some_and(|newer| newer.id > id) {
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt = %id, route = %route.name, "superseded by a newer navigation");
            return;
        }

        // Keep the requested location unless resolution moved to another path.
        let location = match request.target() {
            NavigationTarget::Location(location)
                if self.base.strip(location).map(normalize) == Some(route.path.as_str()) =>
            {
                location.clone()
            }
            _ => self.base.join(&route.path),
        };

        match request.mode() {
            NavigationMode::Push => {
                if self.history.location() != location {
                    self.history.push(&location);
                }
            }
            NavigationMode::Replace => self.history.replace(&location),
            NavigationMode::Pop => {
                if self.history.location() != location {
                    self.history.replace(&location);
                }
            }
        }

        *committed = Some(Committed {
            id,
            route: route.clone(),
        });
    }
}
