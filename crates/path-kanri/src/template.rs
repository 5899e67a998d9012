//! Route template parsing and placeholder substitution.

use std::sync::LazyLock;

use regex::Regex;

use crate::params::PathParams;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("Invalid placeholder regex"));

/// Extracts the placeholder names of a template, in order of appearance.
///
/// Repeated names are kept. Unmatched braces are treated as literal text.
///
/// # Example
///
/// ```
/// use path_kanri::parse_param_names;
///
/// assert_eq!(
///     parse_param_names("/example/{exampleId}/{slug}"),
///     vec!["exampleId", "slug"]
/// );
/// assert!(parse_param_names("/no-params").is_empty());
/// ```
#[must_use]
pub fn parse_param_names(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Replaces each `{name}` placeholder with its value from `params`.
///
/// Every entry of `names` replaces the first remaining occurrence of its
/// placeholder, so a name listed twice fills two occurrences. Callers must
/// validate `params` against `names` first; a name without a value is left
/// in place.
#[must_use]
pub fn substitute(template: &str, names: &[String], params: &PathParams) -> String {
    let mut path = template.to_string();
    for name in names {
        if let Some(value) = params.get(name) {
            path = path.replacen(&format!("{{{name}}}"), value, 1);
        }
    }
    path
}

/// A route template together with its parsed placeholder names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    /// The original template string.
    raw: String,
    /// Placeholder names in order of appearance.
    param_names: Vec<String>,
}

impl RouteTemplate {
    /// Parses a template string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let param_names = parse_param_names(&raw);
        Self { raw, param_names }
    }

    /// Returns the original template string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the placeholder names.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Returns true if the template has no placeholders.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.param_names.is_empty()
    }

    /// Fills the placeholders from `params`.
    #[must_use]
    pub fn substitute(&self, params: &PathParams) -> String {
        substitute(&self.raw, &self.param_names, params)
    }
}
