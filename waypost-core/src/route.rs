//! Route definitions.
//!
//! A [`RouteDefinition`] maps a path pattern to a [`RouteTarget`]: either a
//! lazily loaded view or a redirect to another route, by name. The two are
//! variants of one enum, so a route can never carry both.

use crate::loader::{Loader, SharedLoader};
use std::{fmt, sync::Arc};

/// What a route leads to.
pub enum RouteTarget<V> {
    /// A view unit produced by a loader.
    View(SharedLoader<V>),
    /// A redirect to the route with this name.
    Redirect(String),
}

impl<V> RouteTarget<V> {
    /// Returns the redirect target name, if this is a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            RouteTarget::Redirect(name) => Some(name),
            RouteTarget::View(_) => None,
        }
    }

    /// Returns the loader, if this is a view.
    pub fn loader(&self) -> Option<&SharedLoader<V>> {
        match self {
            RouteTarget::View(loader) => Some(loader),
            RouteTarget::Redirect(_) => None,
        }
    }

    /// Returns true if this target is a redirect.
    pub fn is_redirect(&self) -> bool {
        matches!(self, RouteTarget::Redirect(_))
    }
}

impl<V> Clone for RouteTarget<V> {
    fn clone(&self) -> Self {
        match self {
            RouteTarget::View(loader) => RouteTarget::View(Arc::clone(loader)),
            RouteTarget::Redirect(name) => RouteTarget::Redirect(name.clone()),
        }
    }
}

impl<V> fmt::Debug for RouteTarget<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTarget::View(_) => f.write_str("View(..)"),
            RouteTarget::Redirect(name) => f.debug_tuple("Redirect").field(name).finish(),
        }
    }
}

/// A single entry of a route table.
///
/// # Example
///
/// ```rust,ignore
/// let routes = vec![
///     RouteDefinition::view("Home", "/home", || async { Ok(View::Home) }),
///     RouteDefinition::redirect("Start", "/start", "Home"),
///     RouteDefinition::view("NotFound", "/404", || async { Ok(View::NotFound) })
///         .with_alias("/not-found")
///         .as_fallback(),
/// ];
/// ```
pub struct RouteDefinition<V> {
    name: String,
    path: String,
    aliases: Vec<String>,
    target: RouteTarget<V>,
    fallback: bool,
}

impl<V> RouteDefinition<V> {
    /// A route activating the view produced by `loader`.
    pub fn view<L>(name: impl Into<String>, path: impl Into<String>, loader: L) -> Self
    where
        L: Loader<V>,
        V: 'static,
    {
        Self::new(name, path, RouteTarget::View(Arc::new(loader)))
    }

    /// A route redirecting to the route named `target`.
    pub fn redirect(
        name: impl Into<String>,
        path: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(name, path, RouteTarget::Redirect(target.into()))
    }

    /// A route with an explicit target.
    pub fn new(name: impl Into<String>, path: impl Into<String>, target: RouteTarget<V>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            aliases: Vec::new(),
            target,
            fallback: false,
        }
    }

    /// Mark this route as the catch-all fallback.
    pub fn as_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    /// Add an alias pattern resolving to this route.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// The route's unique logical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The route's primary path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Additional patterns resolving to this route.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// What the route leads to.
    pub fn target(&self) -> &RouteTarget<V> {
        &self.target
    }

    /// Whether this route is the fallback.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Whether this route is a redirect.
    pub fn is_redirect(&self) -> bool {
        self.target.is_redirect()
    }

    /// The primary path followed by every alias, in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.path.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

impl<V> Clone for RouteDefinition<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            aliases: self.aliases.clone(),
            target: self.target.clone(),
            fallback: self.fallback,
        }
    }
}

impl<V> fmt::Debug for RouteDefinition<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("aliases", &self.aliases)
            .field("target", &self.target)
            .field("fallback", &self.fallback)
            .finish()
    }
}
