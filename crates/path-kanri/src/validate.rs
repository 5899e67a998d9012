//! Parameter validation against a template's placeholders.

use std::collections::HashSet;

use crate::error::{Result, RouteError};
use crate::params::PathParams;

/// Checks `params` against the placeholder `names` of a route.
///
/// The check is count-based first: when the number of given parameters
/// differs from the number of distinct placeholders, the result is
/// [`RouteError::MissingParameters`], whether there are too few or too many.
/// When the counts match but a given key is not a placeholder name, the
/// result is [`RouteError::InvalidParameters`].
///
/// # Errors
///
/// Returns [`RouteError::MissingParameters`] or
/// [`RouteError::InvalidParameters`] naming `route_name` and `template`.
pub fn validate(
    names: &[String],
    params: &PathParams,
    route_name: &str,
    template: &str,
) -> Result<()> {
    let required: HashSet<&str> = names.iter().map(String::as_str).collect();

    if params.len() != required.len() {
        return Err(RouteError::missing(route_name, template));
    }

    if !params.keys().all(|key| required.contains(key)) {
        return Err(RouteError::invalid(route_name, template));
    }

    Ok(())
}
