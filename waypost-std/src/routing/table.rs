//! The route table.
//!
//! An immutable, ordered collection of route definitions built once at
//! start-up. Resolution is a pure function of the table and the requested
//! path:
//!
//! 1. the path is normalized (query, fragment and trailing slash dropped);
//! 2. the bare root `/` redirects to the root alias target (`Home` by default);
//! 3. routes are tested in declaration order and the first structural match
//!    wins;
//! 4. when nothing matches, the fallback route is selected.
//!
//! Redirect routes resolve to a [`Resolution::Redirect`] carrying the target
//! name. [`RouteTable::follow`] re-resolves the target's own path and refuses
//! to follow a second hop.

use crate::routing::pattern::{PathMatcher, RouteParams, normalize};
use std::{collections::HashMap, fmt};
use waypost_core::{ConfigError, NavigationError, RouteDefinition, RouteTarget, SharedLoader};

/// The route the bare root `/` redirects to unless configured otherwise.
pub const DEFAULT_ROOT: &str = "Home";

struct CompiledRoute<V> {
    definition: RouteDefinition<V>,
    matcher: PathMatcher,
}

/// An immutable, validated route table.
pub struct RouteTable<V> {
    routes: Vec<CompiledRoute<V>>,
    by_name: HashMap<String, usize>,
    fallback: Option<usize>,
    root: Option<String>,
}

impl<V> RouteTable<V> {
    /// Build a table from `routes` with the default root alias.
    pub fn new(routes: impl IntoIterator<Item = RouteDefinition<V>>) -> Result<Self, ConfigError> {
        Self::builder().routes(routes).build()
    }

    /// Start building a table.
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::default()
    }

    /// Resolve a path relative to the base path.
    pub fn resolve(&self, path: &str) -> Resolution<'_, V> {
        let path = normalize(path);

        if path == "/" {
            if let Some(root) = &self.root {
                return Resolution::Redirect {
                    from: None,
                    to: root.as_str(),
                };
            }
        }

        for route in &self.routes {
            if let Some(params) = route.matcher.matches(path) {
                return Self::select(route, path, params, false);
            }
        }

        match self.fallback {
            Some(index) => Self::select(&self.routes[index], path, RouteParams::default(), true),
            None => Resolution::NotFound,
        }
    }

    /// Resolve a path and follow at most one redirect hop.
    pub fn follow(&self, path: &str) -> Result<ResolvedRoute<'_, V>, NavigationError> {
        match self.resolve(path) {
            Resolution::Matched(route) => Ok(route),
            Resolution::Redirect { from, to } => self.follow_redirect(from, to),
            Resolution::NotFound => Err(NavigationError::NotFound(normalize(path).to_string())),
        }
    }

    /// Resolve a route by logical name, following its redirect if it is one.
    ///
    /// The resolved path is the route's declared path, so routes whose path
    /// has parameters cannot be resolved by name.
    pub fn resolve_name(&self, name: &str) -> Result<ResolvedRoute<'_, V>, NavigationError> {
        let route = self
            .by_name
            .get(name)
            .map(|&index| &self.routes[index])
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;
        let definition = &route.definition;

        match definition.target() {
            RouteTarget::View(_) if route.matcher.is_parameterized() => {
                Err(NavigationError::ParameterizedRoute(name.to_string()))
            }
            RouteTarget::View(loader) => Ok(ResolvedRoute {
                definition,
                loader,
                path: normalize(definition.path()).to_string(),
                params: RouteParams::default(),
                fallback: false,
                redirected_from: None,
            }),
            RouteTarget::Redirect(to) => self.follow_redirect(Some(definition.name()), to),
        }
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Option<&RouteDefinition<V>> {
        self.by_name
            .get(name)
            .map(|&index| &self.routes[index].definition)
    }

    /// The concrete path of the named route, for building links.
    ///
    /// `None` for unknown routes and for routes whose path has parameters.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        let route = &self.routes[*self.by_name.get(name)?];
        if route.matcher.is_parameterized() {
            return None;
        }
        Some(route.definition.path())
    }

    /// The routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDefinition<V>> {
        self.routes.iter().map(|route| &route.definition)
    }

    /// The fallback route.
    pub fn fallback(&self) -> Option<&RouteDefinition<V>> {
        self.fallback.map(|index| &self.routes[index].definition)
    }

    /// The name the bare root `/` redirects to, if root aliasing is on.
    pub fn root_target(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn select<'a>(
        route: &'a CompiledRoute<V>,
        path: &str,
        params: RouteParams,
        fallback: bool,
    ) -> Resolution<'a, V> {
        match route.definition.target() {
            RouteTarget::Redirect(to) => Resolution::Redirect {
                from: Some(route.definition.name()),
                to: to.as_str(),
            },
            RouteTarget::View(loader) => Resolution::Matched(ResolvedRoute {
                definition: &route.definition,
                loader,
                path: path.to_string(),
                params,
                fallback,
                redirected_from: None,
            }),
        }
    }

    fn follow_redirect<'a>(
        &'a self,
        from: Option<&'a str>,
        to: &'a str,
    ) -> Result<ResolvedRoute<'a, V>, NavigationError> {
        let target = self
            .get(to)
            .ok_or_else(|| NavigationError::UnknownRoute(to.to_string()))?;

        match self.resolve(target.path()) {
            Resolution::Matched(mut route) => {
                route.redirected_from = from;
                Ok(route)
            }
            Resolution::Redirect { to: next, .. } => Err(NavigationError::RedirectChain {
                from: to.to_string(),
                to: next.to_string(),
            }),
            Resolution::NotFound => Err(NavigationError::NotFound(target.path().to_string())),
        }
    }
}

impl<V> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes().collect::<Vec<_>>())
            .field("root", &self.root)
            .finish()
    }
}

/// Builder for [`RouteTable`].
pub struct RouteTableBuilder<V> {
    routes: Vec<RouteDefinition<V>>,
    root: Option<String>,
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            root: Some(DEFAULT_ROOT.to_string()),
        }
    }
}

impl<V> RouteTableBuilder<V> {
    /// Append a route.
    pub fn route(mut self, route: RouteDefinition<V>) -> Self {
        self.routes.push(route);
        self
    }

    /// Append routes, keeping their order.
    pub fn routes(mut self, routes: impl IntoIterator<Item = RouteDefinition<V>>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Redirect the bare root `/` to the route named `name`.
    pub fn root_alias(mut self, name: impl Into<String>) -> Self {
        self.root = Some(name.into());
        self
    }

    /// Resolve `/` like any other path.
    pub fn without_root_alias(mut self) -> Self {
        self.root = None;
        self
    }

    /// Validate the routes and build the table.
    pub fn build(self) -> Result<RouteTable<V>, ConfigError> {
        let mut compiled: Vec<CompiledRoute<V>> = Vec::with_capacity(self.routes.len());
        let mut by_name = HashMap::with_capacity(self.routes.len());
        let mut patterns: HashMap<String, String> = HashMap::new();
        let mut fallback: Option<usize> = None;

        for (index, definition) in self.routes.into_iter().enumerate() {
            let name = definition.name().to_string();
            if by_name.insert(name.clone(), index).is_some() {
                return Err(ConfigError::DuplicateName(name));
            }

            if definition.is_fallback() {
                if let Some(first) = fallback {
                    return Err(ConfigError::DuplicateFallback {
                        first: compiled[first].definition.name().to_string(),
                        second: name,
                    });
                }
                fallback = Some(index);
            }

            let matcher = PathMatcher::compile(&name, definition.patterns())?;
            for pattern in matcher.patterns() {
                if pattern == "/" && self.root.is_some() {
                    return Err(ConfigError::ShadowedRoot(name));
                }
                if let Some(first) = patterns.insert(pattern.clone(), name.clone()) {
                    return Err(ConfigError::DuplicatePattern {
                        pattern: pattern.clone(),
                        first,
                        second: name,
                    });
                }
            }

            compiled.push(CompiledRoute {
                definition,
                matcher,
            });
        }

        if fallback.is_none() {
            return Err(ConfigError::MissingFallback);
        }

        let is_redirect = |name: &str| {
            by_name
                .get(name)
                .map(|&index| compiled[index].definition.is_redirect())
        };
        let is_parameterized = |name: &str| {
            by_name
                .get(name)
                .is_some_and(|&index| compiled[index].matcher.is_parameterized())
        };

        for route in &compiled {
            if let RouteTarget::Redirect(target) = route.definition.target() {
                match is_redirect(target) {
                    None => {
                        return Err(ConfigError::UnknownRedirectTarget {
                            route: route.definition.name().to_string(),
                            target: target.clone(),
                        });
                    }
                    Some(true) => {
                        return Err(ConfigError::RedirectChain {
                            route: route.definition.name().to_string(),
                            target: target.clone(),
                        });
                    }
                    Some(false) if is_parameterized(target) => {
                        return Err(ConfigError::ParameterizedTarget {
                            from: route.definition.name().to_string(),
                            target: target.clone(),
                        });
                    }
                    Some(false) => {}
                }
            }
        }

        if let Some(root) = &self.root {
            match is_redirect(root) {
                None => return Err(ConfigError::UnknownRootTarget(root.clone())),
                Some(true) => return Err(ConfigError::RootTargetIsRedirect(root.clone())),
                Some(false) if is_parameterized(root) => {
                    return Err(ConfigError::ParameterizedTarget {
                        from: "/".to_string(),
                        target: root.clone(),
                    });
                }
                Some(false) => {}
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            routes = compiled.len(),
            root = ?self.root,
            "route table built"
        );

        Ok(RouteTable {
            routes: compiled,
            by_name,
            fallback,
            root: self.root,
        })
    }
}

/// The result of resolving a path.
pub enum Resolution<'a, V> {
    /// A view route matched.
    Matched(ResolvedRoute<'a, V>),
    /// A redirect route matched (or the bare root was requested).
    Redirect {
        /// The redirect route's name; `None` for the root alias.
        from: Option<&'a str>,
        /// The target route's name.
        to: &'a str,
    },
    /// Nothing matched and the table has no fallback.
    NotFound,
}

impl<'a, V> Resolution<'a, V> {
    /// Returns true if a view route matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    /// Returns the matched route, if any.
    pub fn matched(self) -> Option<ResolvedRoute<'a, V>> {
        match self {
            Resolution::Matched(route) => Some(route),
            _ => None,
        }
    }

    /// Returns the redirect target name, if this is a redirect.
    pub fn redirect_target(&self) -> Option<&'a str> {
        match self {
            Resolution::Redirect { to, .. } => Some(to),
            _ => None,
        }
    }
}

impl<V> fmt::Debug for Resolution<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Matched(route) => f.debug_tuple("Matched").field(route).finish(),
            Resolution::Redirect { from, to } => f
                .debug_struct("Redirect")
                .field("from", from)
                .field("to", to)
                .finish(),
            Resolution::NotFound => f.write_str("NotFound"),
        }
    }
}

/// A view route selected by resolution.
pub struct ResolvedRoute<'a, V> {
    definition: &'a RouteDefinition<V>,
    loader: &'a SharedLoader<V>,
    path: String,
    params: RouteParams,
    fallback: bool,
    redirected_from: Option<&'a str>,
}

impl<'a, V> ResolvedRoute<'a, V> {
    /// The route's name.
    pub fn name(&self) -> &'a str {
        self.definition.name()
    }

    /// The route's declared path pattern.
    pub fn pattern(&self) -> &'a str {
        self.definition.path()
    }

    /// The normalized path that was matched.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters captured from the path.
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Whether the route was selected as the catch-all fallback, rather than
    /// by one of its own patterns.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// The redirect route this was reached through, if any.
    pub fn redirected_from(&self) -> Option<&'a str> {
        self.redirected_from
    }

    /// The route definition.
    pub fn definition(&self) -> &'a RouteDefinition<V> {
        self.definition
    }

    /// The loader producing the route's view.
    pub fn loader(&self) -> &'a SharedLoader<V> {
        self.loader
    }
}

impl<V> PartialEq for ResolvedRoute<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
            && self.path == other.path
            && self.params == other.params
            && self.fallback == other.fallback
            && self.redirected_from == other.redirected_from
    }
}

impl<V> fmt::Debug for ResolvedRoute<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedRoute")
            .field("name", &self.name())
            .field("path", &self.path)
            .field("params", &self.params)
            .field("fallback", &self.fallback)
            .field("redirected_from", &self.redirected_from)
            .finish()
    }
}
