//! The named-route registry.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::compose::{with_base_url, with_query_params};
use crate::error::{Result, RouteError};
use crate::params::{PathParams, QueryParams};
use crate::template::RouteTemplate;
use crate::validate::validate;

/// An immutable mapping from route names to URI templates, plus a base URL.
///
/// Building a path is a pure computation over this state, so a registry can
/// be shared between threads without synchronization.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    /// Parsed templates keyed by route name.
    routes: BTreeMap<String, RouteTemplate>,
    /// Prefix for full paths.
    base_url: String,
}

impl RouteRegistry {
    /// Creates a registry from `(name, template)` pairs with an empty base URL.
    ///
    /// A later pair with the same name replaces an earlier one.
    #[must_use]
    pub fn new<I, K, V>(routes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let routes: BTreeMap<String, RouteTemplate> = routes
            .into_iter()
            .map(|(name, template)| (name.into(), RouteTemplate::new(template)))
            .collect();
        debug!(routes = routes.len(), "Built route registry");
        Self {
            routes,
            base_url: String::new(),
        }
    }

    /// Sets the base URL prepended by [`RouteRegistry::get_full_path`].
    ///
    /// The base URL should not end with a slash, since templates start
    /// with one.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        debug!(base_url = %self.base_url, "Set route registry base URL");
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the raw template of a route.
    #[must_use]
    pub fn template(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(RouteTemplate::raw)
    }

    /// Returns the placeholder names of a route.
    #[must_use]
    pub fn param_names(&self, name: &str) -> Option<&[String]> {
        self.routes.get(name).map(RouteTemplate::param_names)
    }

    /// Returns true if `name` is a known route.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Returns the route names in sorted order.
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the registry has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Builds the path of a named route, without the base URL.
    ///
    /// Routes without placeholders return their template as-is and ignore
    /// `params`. Otherwise `params` must name every placeholder exactly.
    /// A non-empty `query` is appended as `/?key=value&...`.
    ///
    /// # Example
    ///
    /// ```
    /// use path_kanri::{PathParams, QueryParams, RouteRegistry};
    ///
    /// let registry = RouteRegistry::new([("example", "/example/{exampleId}/{slug}")]);
    /// let params = PathParams::from([("exampleId", "1"), ("slug", "abc")]);
    /// let query = QueryParams::from([("page", "1")]);
    ///
    /// let path = registry.get_path("example", Some(&params), Some(&query)).unwrap();
    /// assert_eq!(path, "/example/1/abc/?page=1");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnknownRoute`] if `name` is not registered.
    /// - [`RouteError::MissingParameters`] if the route has placeholders and
    ///   `params` is absent or has a different count.
    /// - [`RouteError::InvalidParameters`] if the count matches but the names
    ///   do not.
    pub fn get_path(
        &self,
        name: &str,
        params: Option<&PathParams>,
        query: Option<&QueryParams>,
    ) -> Result<String> {
        let template = self
            .routes
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute {
                name: name.to_string(),
            })?;

        if template.is_static() {
            return Ok(with_query_params(template.raw().to_string(), query));
        }

        let params = params.ok_or_else(|| RouteError::missing(name, template.raw()))?;
        validate(template.param_names(), params, name, template.raw())?;

        let path = with_query_params(template.substitute(params), query);
        trace!(route = name, path = %path, "Built route path");
        Ok(path)
    }

    /// Builds the path of a named route, prefixed with the base URL.
    ///
    /// # Errors
    ///
    /// Same as [`RouteRegistry::get_path`].
    pub fn get_full_path(
        &self,
        name: &str,
        params: Option<&PathParams>,
        query: Option<&QueryParams>,
    ) -> Result<String> {
        let path = self.get_path(name, params, query)?;
        Ok(with_base_url(&self.base_url, &path))
    }
}
