//! Path patterns backed by `matchit`.
//!
//! Each route compiles its own patterns (primary path plus aliases) into a
//! private `matchit` router. The route table then tests routes one by one in
//! declaration order, so the first structural match wins regardless of how
//! specific a later pattern is.
//!
//! Pattern syntax is `matchit`'s: literal segments, named parameters
//! (`/user/{id}`) and a trailing catch-all (`/files/{*rest}`).

use matchit::{Match, Router as InnerRouter};
use waypost_core::ConfigError;

/// Parameters captured while matching a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    /// Look up a parameter by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters were captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Strip query and fragment, and drop a trailing slash from non-root paths.
///
/// An empty path is the root.
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether `pattern` captures parameters (`{name}` or `{*rest}`).
///
/// Escaped braces (`{{`, `}}`) are literals.
pub fn has_params(pattern: &str) -> bool {
    pattern.replace("{{", "").replace("}}", "").contains('{')
}

/// The compiled patterns of one route.
pub(crate) struct PathMatcher {
    router: InnerRouter<()>,
    patterns: Vec<String>,
}

impl PathMatcher {
    /// Compile every pattern of the route named `route`.
    pub(crate) fn compile<'a>(
        route: &str,
        patterns: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ConfigError> {
        let mut matcher = Self {
            router: InnerRouter::new(),
            patterns: Vec::new(),
        };

        for pattern in patterns {
            let normalized = check_pattern(route, pattern)?;
            matcher
                .router
                .insert(normalized.to_string(), ())
                .map_err(|e| ConfigError::InvalidPattern {
                    route: route.to_string(),
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
            matcher.patterns.push(normalized.to_string());
        }

        Ok(matcher)
    }

    /// Whether the primary pattern captures parameters, so that the route
    /// has no single concrete path.
    pub(crate) fn is_parameterized(&self) -> bool {
        self.patterns.first().is_some_and(|pattern| has_params(pattern))
    }

    /// The normalized patterns, in declaration order.
    pub(crate) fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Match a normalized path, returning the captured parameters.
    pub(crate) fn matches(&self, path: &str) -> Option<RouteParams> {
        match self.router.at(path) {
            Ok(Match { params, .. }) => Some(RouteParams(
                params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )),
            Err(_) => None,
        }
    }
}

fn check_pattern<'p>(route: &str, pattern: &'p str) -> Result<&'p str, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidPattern {
        route: route.to_string(),
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    if !pattern.starts_with('/') {
        return Err(invalid("pattern must start with '/'"));
    }
    if pattern.contains(['?', '#']) {
        return Err(invalid("pattern must not contain a query or fragment"));
    }
    Ok(normalize(pattern))
}
