//! The base path a router is mounted under.

use std::fmt;

/// The prefix every browser location of the application shares.
///
/// Always starts with `/` and never ends with one, except for the root base
/// `/` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Normalize and wrap a base path. `""`, `"/"` and `"app/"` become `/`,
    /// `/` and `/app`.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// The root base `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Whether this is the root base.
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// The base as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Make `location` relative to the base.
    ///
    /// The prefix must end at a segment boundary: `/apple` is not under
    /// `/app`. Returns `None` for locations outside the base.
    pub fn strip<'a>(&self, location: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(location);
        }
        let rest = location.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with(['/', '?', '#']) {
            Some(rest)
        } else {
            None
        }
    }

    /// Prefix a table path with the base.
    pub fn join(&self, path: &str) -> String {
        if self.is_root() {
            path.to_string()
        } else {
            format!("{}{}", self.0, path)
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BasePath {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}
