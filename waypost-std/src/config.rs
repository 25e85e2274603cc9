//! Declarative router configuration.
//!
//! Routes can be declared in TOML instead of code. Views are referenced by
//! key and bound to loaders by the application through a [`LoaderSet`]:
//!
//! ```toml
//! base = "/showcase"
//!
//! [[routes]]
//! name = "Home"
//! path = "/home"
//! view = "home"
//!
//! [[routes]]
//! name = "Legacy"
//! path = "/old-home"
//! redirect = "Home"
//!
//! [[routes]]
//! name = "NotFound"
//! path = "/404"
//! aliases = ["/not-found"]
//! view = "not-found"
//! fallback = true
//! ```

use crate::routing::{BasePath, DEFAULT_ROOT, RouteTable};
use serde::Deserialize;
use std::{collections::HashMap, path::Path, sync::Arc};
use waypost_core::{ConfigError, Loader, RouteDefinition, RouteTarget, SharedLoader};

/// Root configuration of a router.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// The base path the application is mounted under.
    #[serde(default = "default_base")]
    pub base: String,

    /// The route the bare root `/` redirects to.
    #[serde(default = "default_root")]
    pub root: String,

    /// Route declarations, in matching order.
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// One declared route.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Unique route name.
    pub name: String,

    /// Primary path pattern.
    pub path: String,

    /// Extra path patterns.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Key of the view loader, for view routes.
    pub view: Option<String>,

    /// Target route name, for redirect routes.
    pub redirect: Option<String>,

    /// Whether this is the fallback route.
    #[serde(default)]
    pub fallback: bool,
}

fn default_base() -> String {
    "/".to_string()
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

impl RouterConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// The configured base path.
    pub fn base_path(&self) -> BasePath {
        BasePath::new(&self.base)
    }

    /// Bind views to `loaders` and build a validated route table.
    pub fn build_table<V: 'static>(&self, loaders: &LoaderSet<V>) -> Result<RouteTable<V>, ConfigError> {
        let routes = self
            .routes
            .iter()
            .map(|route| route.to_definition(loaders))
            .collect::<Result<Vec<_>, _>>()?;

        RouteTable::builder()
            .root_alias(self.root.clone())
            .routes(routes)
            .build()
    }
}

impl RouteConfig {
    fn to_definition<V: 'static>(&self, loaders: &LoaderSet<V>) -> Result<RouteDefinition<V>, ConfigError> {
        let target = match (&self.view, &self.redirect) {
            (Some(view), None) => RouteTarget::View(loaders.get(view).ok_or_else(|| {
                ConfigError::UnknownView {
                    route: self.name.clone(),
                    view: view.clone(),
                }
            })?),
            (None, Some(target)) => RouteTarget::Redirect(target.clone()),
            (None, None) => return Err(ConfigError::MissingTarget(self.name.clone())),
            (Some(_), Some(_)) => return Err(ConfigError::AmbiguousTarget(self.name.clone())),
        };

        let mut definition = RouteDefinition::new(self.name.clone(), self.path.clone(), target);
        for alias in &self.aliases {
            definition = definition.with_alias(alias.clone());
        }
        if self.fallback {
            definition = definition.as_fallback();
        }
        Ok(definition)
    }
}

/// View loaders keyed by the names used in configuration.
pub struct LoaderSet<V> {
    loaders: HashMap<String, SharedLoader<V>>,
}

impl<V> Default for LoaderSet<V> {
    fn default() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }
}

impl<V: 'static> LoaderSet<V> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `loader` to `key`, replacing any previous binding.
    pub fn with<L: Loader<V>>(mut self, key: impl Into<String>, loader: L) -> Self {
        self.loaders.insert(key.into(), Arc::new(loader));
        self
    }

    /// The loader bound to `key`.
    pub fn get(&self, key: &str) -> Option<SharedLoader<V>> {
        self.loaders.get(key).cloned()
    }

    /// Number of bound loaders.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Whether no loader is bound.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticLoader;

    const SHOWCASE: &str = r#"
        base = "/showcase/"

        [[routes]]
        name = "Home"
        path = "/home"
        view = "home"

        [[routes]]
        name = "Faber"
        path = "/faber"
        view = "faber"

        [[routes]]
        name = "Legacy"
        path = "/old-home"
        redirect = "Home"

        [[routes]]
        name = "NotFound"
        path = "/404"
        aliases = ["/not-found"]
        view = "not-found"
        fallback = true
    "#;

    fn loaders() -> LoaderSet<&'static str> {
        LoaderSet::new()
            .with("home", StaticLoader::new("home"))
            .with("faber", StaticLoader::new("faber"))
            .with("not-found", StaticLoader::new("not-found"))
    }

    #[test]
    fn test_parse_defaults() {
        let config = RouterConfig::from_toml_str("").unwrap();
        assert_eq!(config.base, "/");
        assert_eq!(config.root, "Home");
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_build_table_from_toml() {
        let config = RouterConfig::from_toml_str(SHOWCASE).unwrap();
        assert_eq!(config.base_path().as_str(), "/showcase");

        let table = config.build_table(&loaders()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.follow("/").unwrap().name(), "Home");
        assert_eq!(table.follow("/old-home").unwrap().name(), "Home");
        assert_eq!(table.follow("/not-found").unwrap().name(), "NotFound");
        assert!(table.follow("/anything").unwrap().is_fallback());
    }

    #[test]
    fn test_unknown_view() {
        let config = RouterConfig::from_toml_str(SHOWCASE).unwrap();
        let loaders = LoaderSet::new().with("home", StaticLoader::new("home"));
        let err = config.build_table(&loaders).err().unwrap();
        assert!(matches!(err, ConfigError::UnknownView { route, view } if route == "Faber" && view == "faber"));
    }

    #[test]
    fn test_target_must_be_exclusive() {
        let both = RouterConfig::from_toml_str(
            r#"
            [[routes]]
            name = "Home"
            path = "/home"
            view = "home"
            redirect = "Faber"
            "#,
        )
        .unwrap();
        assert!(matches!(
            both.build_table(&loaders()),
            Err(ConfigError::AmbiguousTarget(_))
        ));

        let neither = RouterConfig::from_toml_str(
            r#"
            [[routes]]
            name = "Home"
            path = "/home"
            "#,
        )
        .unwrap();
        assert!(matches!(
            neither.build_table(&loaders()),
            Err(ConfigError::MissingTarget(_))
        ));
    }

    #[test]
    fn test_table_validation_applies() {
        let config = RouterConfig::from_toml_str(
            r#"
            [[routes]]
            name = "Home"
            path = "/home"
            view = "home"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.build_table(&loaders()),
            Err(ConfigError::MissingFallback)
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = RouterConfig::from_toml_str("routes = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = RouterConfig::from_toml_str("colour = \"blue\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RouterConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
