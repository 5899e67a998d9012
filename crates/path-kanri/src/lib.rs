//! # path-kanri
//!
//! Builds concrete paths from a static map of named URI templates.
//!
//! This crate provides:
//! - `{name}` placeholder parsing and substitution
//! - Parameter validation with diagnosable errors
//! - Query string composition with percent-encoding
//! - An optional base URL for full paths
//! - Route maps loaded from JSON documents
//!
//! ## Quick Start
//!
//! ```
//! use path_kanri::{PathParams, QueryParams, RouteRegistry};
//!
//! let registry = RouteRegistry::new([
//!     ("home", "/"),
//!     ("example", "/example/{exampleId}/{slug}"),
//! ])
//! .with_base_url("http://example.com");
//!
//! let params = PathParams::from([("exampleId", "1"), ("slug", "abc")]);
//! assert_eq!(
//!     registry.get_path("example", Some(&params), None).unwrap(),
//!     "/example/1/abc"
//! );
//!
//! let query = QueryParams::from([("page", "1"), ("type", "fire")]);
//! assert_eq!(
//!     registry.get_full_path("example", Some(&params), Some(&query)).unwrap(),
//!     "http://example.com/example/1/abc/?page=1&type=fire"
//! );
//! ```
//!
//! ## Errors
//!
//! Building a path fails with [`RouteError::UnknownRoute`],
//! [`RouteError::MissingParameters`] or [`RouteError::InvalidParameters`].
//! Validation runs before any substitution, so no partial path is produced.

mod compose;
mod config;
mod error;
mod params;
mod registry;
mod template;
mod validate;

pub use compose::{encode_query, with_base_url, with_query_params};
pub use config::RouteConfig;
pub use error::{Result, RouteError};
pub use params::{PathParams, QueryParams};
pub use registry::RouteRegistry;
pub use template::{RouteTemplate, parse_param_names, substitute};
pub use validate::validate;
