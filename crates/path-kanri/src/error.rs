//! Error types for path building.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while building a path or loading a route map.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The route name is not a key of the route map.
    #[error("unknown route name: {name}")]
    UnknownRoute {
        /// The requested route name.
        name: String,
    },

    /// No parameters were given, or their count does not match the template.
    #[error("Missing required parameters for [NAME: {name}][URI: {template}].")]
    MissingParameters {
        /// The requested route name.
        name: String,
        /// The raw template of the route.
        template: String,
    },

    /// The parameter count matches but the names do not.
    #[error("Given parameters are not valid for [NAME: {name}][URI: {template}].")]
    InvalidParameters {
        /// The requested route name.
        name: String,
        /// The raw template of the route.
        template: String,
    },

    /// The route map document could not be parsed.
    #[error("invalid route map: {0}")]
    Config(#[from] serde_json::Error),

    /// The route map file could not be read.
    #[error("failed to read route map '{}': {source}", path.display())]
    Io {
        /// Path of the route map file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl RouteError {
    pub(crate) fn missing(name: &str, template: &str) -> Self {
        Self::MissingParameters {
            name: name.to_string(),
            template: template.to_string(),
        }
    }

    pub(crate) fn invalid(name: &str, template: &str) -> Self {
        Self::InvalidParameters {
            name: name.to_string(),
            template: template.to_string(),
        }
    }
}

/// Result type alias for path building operations.
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let err = RouteError::missing("example", "/example/{exampleId}/{slug}");
        assert_eq!(
            err.to_string(),
            "Missing required parameters for [NAME: example][URI: /example/{exampleId}/{slug}]."
        );
    }

    #[test]
    fn test_invalid_message() {
        let err = RouteError::invalid("example", "/example/{exampleId}/{slug}");
        assert_eq!(
            err.to_string(),
            "Given parameters are not valid for [NAME: example][URI: /example/{exampleId}/{slug}]."
        );
    }

    #[test]
    fn test_unknown_route_message() {
        let err = RouteError::UnknownRoute {
            name: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "unknown route name: nope");
    }
}
