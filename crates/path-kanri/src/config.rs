//! Route map documents.
//!
//! A route map is a JSON document:
//!
//! ```json
//! {
//!     "base_url": "http://example.com",
//!     "routes": {
//!         "home": "/",
//!         "example": "/example/{exampleId}/{slug}"
//!     }
//! }
//! ```
//!
//! `base_url` is optional and defaults to an empty string.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RouteError};
use crate::registry::RouteRegistry;

/// Deserialized form of a route map document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Prefix for full paths.
    #[serde(default)]
    pub base_url: String,
    /// Route name to URI template.
    pub routes: BTreeMap<String, String>,
}

impl From<RouteConfig> for RouteRegistry {
    fn from(config: RouteConfig) -> Self {
        Self::new(config.routes).with_base_url(config.base_url)
    }
}

impl RouteRegistry {
    /// Loads a registry from a JSON route map document.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Config`] if the document is not a valid route map.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RouteConfig = serde_json::from_str(json)?;
        Ok(config.into())
    }

    /// Loads a registry from a JSON route map file.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Io`] if the file cannot be read and
    /// [`RouteError::Config`] if it is not a valid route map.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RouteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loading route map");
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let registry = RouteRegistry::from_json_str(
            r#"{"base_url": "http://example.com", "routes": {"users": "/users/{id}"}}"#,
        )
        .unwrap();
        assert_eq!(registry.base_url(), "http://example.com");
        assert_eq!(registry.template("users"), Some("/users/{id}"));
    }

    #[test]
    fn test_base_url_defaults_to_empty() {
        let registry = RouteRegistry::from_json_str(r#"{"routes": {"home": "/"}}"#).unwrap();
        assert_eq!(registry.base_url(), "");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_document() {
        let err = RouteRegistry::from_json_str(r#"{"routes": ["/"]}"#).unwrap_err();
        assert!(matches!(err, RouteError::Config(_)));

        let err = RouteRegistry::from_json_str(r#"{"routes": {}, "extra": 1}"#).unwrap_err();
        assert!(matches!(err, RouteError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        let err = RouteRegistry::from_json_file(&path).unwrap_err();
        match err {
            RouteError::Io { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(&path, r#"{"routes": {"login": "/login"}}"#).unwrap();

        let registry = RouteRegistry::from_json_file(&path).unwrap();
        assert_eq!(registry.get_path("login", None, None).unwrap(), "/login");
    }
}
